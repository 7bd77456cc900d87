//! Real-time playback in the terminal
//!
//! Drives a [`DialogDirector`] from a 60 Hz tokio interval, feeding it the
//! measured frame time, until the sequence completes.

use crate::{
    cli::view_state::{TerminalScreen, mood_faces},
    config::DialogConfig,
    facade::DialogDirector,
    types::Sequence,
};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};

const FRAME: Duration = Duration::from_micros(16_667);

/// What to play
#[derive(Debug, Clone, PartialEq)]
pub enum DialogSource {
    /// Dialog for a finished stage
    Outcome { stage: u32, achieved: i64, goal: i64 },
    /// Final-clear celebration
    FinalClear,
    /// Host-authored script
    Script(Sequence),
}

/// Play `source` in the terminal and return once it has completed
pub async fn run_play(source: DialogSource, config: DialogConfig) -> anyhow::Result<()> {
    let screen = TerminalScreen::new();
    let mut director = DialogDirector::new(config, screen.stage(), mood_faces());

    let done = Rc::new(Cell::new(false));
    let flag = done.clone();
    let on_complete = move |_: &mut DialogDirector| flag.set(true);

    match source {
        DialogSource::Outcome {
            stage,
            achieved,
            goal,
        } => director.start_outcome_dialog(stage, achieved, goal, on_complete),
        DialogSource::FinalClear => director.start_final_clear_dialog(on_complete),
        DialogSource::Script(sequence) => director.start_sequence(sequence, on_complete),
    }

    let mut frames = tokio::time::interval(FRAME);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last = Instant::now();

    while !done.get() {
        frames.tick().await;
        let now = Instant::now();
        director.tick(now.duration_since(last).as_secs_f32());
        last = now;

        for event in director.drain_events() {
            log::trace!(target: "fukidashi::cli", "{event:?}");
            screen.on_event(&event);
        }
    }

    print!("\r\x1b[2K");
    println!("== END ==");
    Ok(())
}
