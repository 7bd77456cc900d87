//! Playback state representation

use serde::{Deserialize, Serialize};

/// Sub-phase of the line currently being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaybackPhase {
    /// No sequence is playing
    #[default]
    Idle,
    /// Bubble scaling in
    ShowingBubble,
    /// Lead-in delay and per-grapheme reveal
    Revealing,
    /// Full text on screen
    Dwelling,
    /// Text being cleared before the bubble leaves
    Clearing,
    /// Bubble scaling out
    HidingBubble,
    /// Gap between two lines
    Pausing,
}

/// Read-only view of a sequencer, for debugging and host UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlaybackSnapshot {
    pub phase: PlaybackPhase,
    /// Index of the line being played, `None` when idle
    pub line_index: Option<usize>,
    /// Number of lines in the active sequence, 0 when idle
    pub line_count: usize,
    /// Text currently shown on the text surface
    pub displayed_text: String,
    /// Scale of the bubble container as last sampled
    pub bubble_scale: f32,
}
