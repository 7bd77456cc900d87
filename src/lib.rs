//! # fukidashi
//!
//! A Rust library that plays game dialog in a speech bubble: the bubble pops
//! in, the text types itself out, holds, and the bubble pops out again, line
//! after line. Dialog content is chosen from how well the player did on a
//! stage.
//!
//! Everything is driven by a per-frame `tick(dt)`, so the same code runs
//! under a real frame loop or a test harness with simulated time.
//!
//! ## Quick Start
//!
//! ```rust
//! use fukidashi::{DialogConfig, DialogDirector, MoodAssets, Stage};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let mut director = DialogDirector::new(DialogConfig::default(), Stage::new(), MoodAssets::new());
//!
//! let done = Rc::new(Cell::new(false));
//! let flag = done.clone();
//! director.start_outcome_dialog(3, 90, 100, move |_| flag.set(true));
//!
//! // Host frame loop
//! while director.is_playing() {
//!     director.tick(1.0 / 60.0);
//! }
//! assert!(done.get());
//! ```
//!
//! ## Lower-level pieces
//!
//! ```rust
//! use fukidashi::content::select_dialogs;
//! use fukidashi::types::{MoodTag, Outcome};
//!
//! let sequence = select_dialogs(&Outcome::new(1, 0, 50));
//! assert!(sequence.iter().any(|line| line.mood == MoodTag::Encouraging));
//! ```

pub mod animation;
pub mod cli;
pub mod config;
pub mod content;
pub mod facade;
pub mod reveal;
pub mod runtime;
pub mod surface;
pub mod timing;
pub mod types;

pub use config::{ConfigError, DialogConfig};
pub use content::{fallback_dialogs, final_clear_dialogs, select_dialogs};
pub use facade::{DialogDirector, DirectorCallback};
pub use runtime::{CompletionCallback, DialogSequencer};
pub use surface::{AssetHandle, BubbleContainer, MoodAssets, MoodImage, Stage, TextSurface};
pub use types::{
    DialogLine, MoodTag, Outcome, PlaybackEvent, PlaybackPhase, PlaybackSnapshot, Sequence,
    SequenceError,
};
