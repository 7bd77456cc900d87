//! Facade used by the title/menu side of the game
//!
//! Wraps content selection and the sequence player behind the three calls a
//! menu or result screen needs: play the dialog for a stage outcome, play
//! the final-clear celebration, and stop whatever is playing.

use crate::config::DialogConfig;
use crate::content;
use crate::runtime::DialogSequencer;
use crate::surface::{MoodAssets, Stage};
use crate::types::{Outcome, PlaybackEvent, PlaybackPhase, PlaybackSnapshot, Sequence};
use std::cell::Cell;
use std::rc::Rc;

/// Completion callback for the director, handed the director itself so a
/// scene transition can start the next dialog or stop playback
pub type DirectorCallback = Box<dyn FnOnce(&mut DialogDirector)>;

/// Entry point for collaborators that only know about stage results
pub struct DialogDirector {
    sequencer: DialogSequencer,
    /// Callback of a sequence that finished inside the sequencer, run once
    /// control is back in the director
    finished: Rc<Cell<Option<DirectorCallback>>>,
}

impl DialogDirector {
    pub fn new(config: DialogConfig, stage: Stage, moods: MoodAssets) -> Self {
        Self::from_sequencer(DialogSequencer::new(config, stage, moods))
    }

    pub fn from_sequencer(sequencer: DialogSequencer) -> Self {
        Self {
            sequencer,
            finished: Rc::new(Cell::new(None)),
        }
    }

    /// Play the dialog matching a finished stage
    pub fn start_outcome_dialog(
        &mut self,
        stage: u32,
        achieved: i64,
        goal: i64,
        on_complete: impl FnOnce(&mut DialogDirector) + 'static,
    ) {
        let sequence = content::select_dialogs(&Outcome::new(stage, achieved, goal));
        self.start_sequence(sequence, on_complete);
    }

    /// Play the celebration for clearing the final stage
    pub fn start_final_clear_dialog(
        &mut self,
        on_complete: impl FnOnce(&mut DialogDirector) + 'static,
    ) {
        self.start_sequence(content::final_clear_dialogs(), on_complete);
    }

    /// Play a host-provided sequence
    ///
    /// A sequence already playing is cancelled and its callback dropped.
    pub fn start_sequence(
        &mut self,
        sequence: Sequence,
        on_complete: impl FnOnce(&mut DialogDirector) + 'static,
    ) {
        let finished = Rc::clone(&self.finished);
        let on_complete: DirectorCallback = Box::new(on_complete);
        self.sequencer
            .play(sequence, move |_| finished.set(Some(on_complete)));
        self.run_finished();
    }

    /// Abort playback, e.g. for an abrupt scene transition
    pub fn force_end(&mut self) {
        self.sequencer.force_end();
        self.run_finished();
    }

    pub fn tick(&mut self, dt: f32) {
        self.sequencer.tick(dt);
        self.run_finished();
    }

    pub fn skip_reveal(&mut self) -> bool {
        self.sequencer.skip_reveal()
    }

    pub fn is_playing(&self) -> bool {
        self.sequencer.is_playing()
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.sequencer.phase()
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.sequencer.snapshot()
    }

    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        self.sequencer.drain_events()
    }

    pub fn sequencer(&self) -> &DialogSequencer {
        &self.sequencer
    }

    pub fn sequencer_mut(&mut self) -> &mut DialogSequencer {
        &mut self.sequencer
    }

    fn run_finished(&mut self) {
        while let Some(on_complete) = self.finished.take() {
            on_complete(self);
        }
    }
}

impl std::fmt::Debug for DialogDirector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogDirector")
            .field("sequencer", &self.sequencer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::tables;

    fn fast_director() -> DialogDirector {
        let config = DialogConfig {
            show_duration: 0.0,
            reveal_tick_delay: 0.0,
            reveal_lead_in: 0.0,
            dwell_duration: 0.0,
            hide_duration: 0.0,
            inter_line_pause: 0.0,
            pause_after_last_line: false,
        };
        DialogDirector::new(config, Stage::new(), MoodAssets::new())
    }

    #[test]
    fn outcome_dialog_plays_selected_lines() {
        let mut director = fast_director();
        let done = Rc::new(Cell::new(false));
        let flag = done.clone();

        director.start_outcome_dialog(5, 0, 100, move |_| flag.set(true));
        assert_eq!(
            director.sequencer().current_line().unwrap().text,
            tables::MID_NO_PROGRESS[0].0
        );

        while director.is_playing() {
            director.tick(1.0);
        }
        assert!(done.get());
    }

    #[test]
    fn final_clear_dialog_starts_with_celebration() {
        let mut director = fast_director();
        director.start_final_clear_dialog(|_| {});
        assert_eq!(
            director.sequencer().current_line().unwrap().text,
            tables::FINAL_CLEAR[0].0
        );
        assert_eq!(director.snapshot().line_count, tables::FINAL_CLEAR.len());
    }

    #[test]
    fn force_end_when_idle_does_nothing() {
        let mut director = fast_director();
        director.force_end();
        assert_eq!(director.phase(), PlaybackPhase::Idle);
        assert!(director.drain_events().is_empty());
    }

    #[test]
    fn completion_callback_can_start_the_next_dialog() {
        let mut director = fast_director();
        let celebrated = Rc::new(Cell::new(0));
        let handle = celebrated.clone();

        director.start_outcome_dialog(content::FINAL_STAGE, 100, 100, move |director| {
            director.start_final_clear_dialog(move |_| handle.set(handle.get() + 1));
        });

        let mut ticks = 0;
        while director.is_playing() {
            director.tick(1.0);
            ticks += 1;
            assert!(ticks < 1_000);
        }
        assert_eq!(celebrated.get(), 1);
        assert_eq!(director.phase(), PlaybackPhase::Idle);
    }

    #[test]
    fn force_end_callback_can_force_end_again() {
        let mut director = fast_director();
        let calls = Rc::new(Cell::new(0));
        let handle = calls.clone();

        director.start_final_clear_dialog(move |director| {
            handle.set(handle.get() + 1);
            director.force_end();
        });
        director.force_end();

        assert_eq!(calls.get(), 1);
        assert!(!director.is_playing());
    }
}
