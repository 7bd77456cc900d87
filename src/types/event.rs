//! Notifications recorded while a sequence plays

use super::line::MoodTag;
use serde::{Deserialize, Serialize};

/// Something observable that happened during playback
///
/// The sequencer queues these; hosts drain them once per frame if they care
/// (sound cues, analytics, debug overlays).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// `play` accepted a sequence of `lines` lines
    SequenceStarted { lines: usize },
    /// A line began: text cleared and mood swapped
    LineStarted { index: usize, mood: MoodTag },
    /// The full text of a line is on screen
    LineRevealed { index: usize },
    /// The bubble for a line has been hidden
    LineFinished { index: usize },
    /// Every line played; the completion callback has run
    SequenceCompleted,
    /// A newer `play` call replaced this sequence; its callback was dropped
    SequenceCancelled,
    /// `force_end` stopped the sequence; its callback has run
    SequenceForceEnded,
}
