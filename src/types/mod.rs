//! Core types for the fukidashi library
//!
//! - Line: dialog lines, moods and the sequences they form
//! - Outcome: stage result used to select content
//! - State: playback phase and snapshots
//! - Event: notifications recorded during playback

pub mod event;
pub mod line;
pub mod outcome;
pub mod state;

pub use event::PlaybackEvent;
pub use line::{DialogLine, MoodTag, Sequence, SequenceError};
pub use outcome::Outcome;
pub use state::{PlaybackPhase, PlaybackSnapshot};
