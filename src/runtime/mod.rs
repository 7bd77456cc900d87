//! Sequence player
//!
//! [`DialogSequencer`] plays a [`Sequence`] line by line on its [`Stage`]:
//! clear text, swap mood, show bubble, reveal text, dwell, clear text, hide
//! bubble, pause, next line. It is a state machine advanced by
//! [`DialogSequencer::tick`], called once per frame by the host.
//!
//! `play` runs synchronously up to the first suspension. Each tick feeds its
//! delta to the current suspension only; when that finishes, the following
//! instantaneous steps run in the same tick until the next suspension starts.

use crate::animation::BubbleAnimator;
use crate::config::DialogConfig;
use crate::reveal::TextRevealer;
use crate::surface::{MoodAssets, Stage};
use crate::timing::{Delay, Progress};
use crate::types::{
    DialogLine, MoodTag, PlaybackEvent, PlaybackPhase, PlaybackSnapshot, Sequence,
};
use std::collections::VecDeque;


/// Callback fired exactly once when a `play` call completes or is force-ended
///
/// It runs after the finished sequence has been released, so it may start
/// the next one through the sequencer it is handed.
pub type CompletionCallback = Box<dyn FnOnce(&mut DialogSequencer)>;

/// Oldest events are dropped past this many undrained entries
const MAX_PENDING_EVENTS: usize = 256;

struct Playback {
    sequence: Sequence,
    index: usize,
    phase: PlaybackPhase,
    /// Dwell or pause timer
    delay: Delay,
    on_complete: Option<CompletionCallback>,
}

enum Next {
    BeginLine(MoodTag),
    Enter(PlaybackPhase),
    Complete,
}

/// Plays dialog sequences on one set of presentation targets
pub struct DialogSequencer {
    config: DialogConfig,
    stage: Stage,
    moods: MoodAssets,
    animator: BubbleAnimator,
    revealer: TextRevealer,
    playback: Option<Playback>,
    events: VecDeque<PlaybackEvent>,
}

impl DialogSequencer {
    /// Create an idle sequencer
    ///
    /// An invalid config is replaced by the defaults.
    pub fn new(config: DialogConfig, stage: Stage, moods: MoodAssets) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                log::warn!(target: "fukidashi::runtime", "{err}; using default timings");
                DialogConfig::default()
            }
        };
        let revealer = TextRevealer::new(config.reveal_lead_in, config.reveal_tick_delay);

        Self {
            config,
            stage,
            moods,
            animator: BubbleAnimator::new(),
            revealer,
            playback: None,
            events: VecDeque::new(),
        }
    }

    /// Start playing `sequence`, calling `on_complete` once it has finished
    ///
    /// A sequence already in flight is cancelled first: its visuals are reset
    /// and its callback is dropped without being called.
    pub fn play(
        &mut self,
        sequence: Sequence,
        on_complete: impl FnOnce(&mut DialogSequencer) + 'static,
    ) {
        if self.halt().is_some() {
            log::debug!(target: "fukidashi::runtime", "play replaced an active sequence");
            record(&mut self.events, PlaybackEvent::SequenceCancelled);
        }

        log::debug!(
            target: "fukidashi::runtime",
            "starting sequence of {} line(s)",
            sequence.len()
        );
        record(
            &mut self.events,
            PlaybackEvent::SequenceStarted {
                lines: sequence.len(),
            },
        );

        self.playback = Some(Playback {
            sequence,
            index: 0,
            phase: PlaybackPhase::Idle,
            delay: Delay::new(0.0),
            on_complete: Some(Box::new(on_complete)),
        });
        self.advance();
    }

    /// Stop immediately: bubble hidden, text empty, pending callback called
    ///
    /// No-op when idle.
    pub fn force_end(&mut self) {
        let Some(mut playback) = self.halt() else {
            return;
        };
        log::debug!(
            target: "fukidashi::runtime",
            "force-ended at line {} ({:?})",
            playback.index,
            playback.phase
        );
        record(&mut self.events, PlaybackEvent::SequenceForceEnded);
        if let Some(on_complete) = playback.on_complete.take() {
            on_complete(self);
        }
    }

    /// Advance playback by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        let Some(playback) = self.playback.as_mut() else {
            return;
        };

        let progress = match playback.phase {
            PlaybackPhase::ShowingBubble | PlaybackPhase::HidingBubble => self
                .animator
                .tick(dt, self.stage.container.as_deref_mut()),
            PlaybackPhase::Revealing => self.revealer.tick(dt, self.stage.text.as_deref_mut()),
            PlaybackPhase::Dwelling | PlaybackPhase::Pausing => playback.delay.tick(dt),
            PlaybackPhase::Idle | PlaybackPhase::Clearing => Progress::Finished,
        };

        if progress.is_finished() {
            self.advance();
        }
    }

    /// Show the rest of the current line at once and move on to dwelling
    ///
    /// Returns false, doing nothing, unless a line is being revealed.
    pub fn skip_reveal(&mut self) -> bool {
        if self.phase() != PlaybackPhase::Revealing {
            return false;
        }
        self.revealer.skip(self.stage.text.as_deref_mut());
        self.advance();
        true
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.playback
            .as_ref()
            .map(|p| p.phase)
            .unwrap_or(PlaybackPhase::Idle)
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_some()
    }

    /// Line currently on stage, if any
    pub fn current_line(&self) -> Option<&DialogLine> {
        let playback = self.playback.as_ref()?;
        playback.sequence.get(playback.index)
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        let Some(playback) = self.playback.as_ref() else {
            return PlaybackSnapshot {
                bubble_scale: self.stage.container_scale(),
                ..PlaybackSnapshot::default()
            };
        };

        let displayed_text = match (playback.phase, self.stage.text.is_some()) {
            (PlaybackPhase::Revealing, true) => self.revealer.displayed().to_string(),
            (PlaybackPhase::Dwelling, true) => self
                .current_line()
                .map(|line| line.text.clone())
                .unwrap_or_default(),
            _ => String::new(),
        };

        PlaybackSnapshot {
            phase: playback.phase,
            line_index: Some(playback.index),
            line_count: playback.sequence.len(),
            displayed_text,
            bubble_scale: self.stage.container_scale(),
        }
    }

    /// Take every event recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        self.events.drain(..).collect()
    }

    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    pub fn moods(&self) -> &MoodAssets {
        &self.moods
    }

    /// Replace the mood lookup; takes effect from the next line
    pub fn set_moods(&mut self, moods: MoodAssets) {
        self.moods = moods;
    }

    /// Stop every timer and animation and reset the visuals
    fn halt(&mut self) -> Option<Playback> {
        let playback = self.playback.take()?;
        self.animator.stop();
        self.revealer.stop();
        self.stage.hide_now();
        self.stage.set_text("");
        Some(playback)
    }

    /// Run instantaneous steps until a suspension starts or the sequence ends
    fn advance(&mut self) {
        loop {
            let Some(playback) = self.playback.as_mut() else {
                return;
            };
            let is_last = playback.index + 1 >= playback.sequence.len();

            let next = match playback.phase {
                PlaybackPhase::Idle => line_start(playback),
                PlaybackPhase::ShowingBubble => Next::Enter(PlaybackPhase::Revealing),
                PlaybackPhase::Revealing => {
                    record(
                        &mut self.events,
                        PlaybackEvent::LineRevealed {
                            index: playback.index,
                        },
                    );
                    Next::Enter(PlaybackPhase::Dwelling)
                }
                PlaybackPhase::Dwelling => Next::Enter(PlaybackPhase::Clearing),
                PlaybackPhase::Clearing => Next::Enter(PlaybackPhase::HidingBubble),
                PlaybackPhase::HidingBubble => {
                    record(
                        &mut self.events,
                        PlaybackEvent::LineFinished {
                            index: playback.index,
                        },
                    );
                    if !is_last || self.config.pause_after_last_line {
                        Next::Enter(PlaybackPhase::Pausing)
                    } else {
                        Next::Complete
                    }
                }
                PlaybackPhase::Pausing => {
                    if is_last {
                        Next::Complete
                    } else {
                        playback.index += 1;
                        line_start(playback)
                    }
                }
            };

            let progress = match next {
                Next::BeginLine(mood) => self.begin_line(mood),
                Next::Enter(phase) => self.enter(phase),
                Next::Complete => {
                    self.complete();
                    return;
                }
            };
            if !progress.is_finished() {
                return;
            }
        }
    }

    /// Clear text, swap mood and start showing the bubble for the current line
    fn begin_line(&mut self, mood: MoodTag) -> Progress {
        let Some(playback) = self.playback.as_mut() else {
            return Progress::Finished;
        };
        let index = playback.index;
        playback.phase = PlaybackPhase::ShowingBubble;

        log::trace!(target: "fukidashi::runtime", "line {index} begins ({})", mood.as_str());
        record(&mut self.events, PlaybackEvent::LineStarted { index, mood });

        self.stage.set_text("");
        self.stage.set_mood(self.moods.resolve(mood));
        self.animator
            .show(self.stage.container.as_deref_mut(), self.config.show_duration)
    }

    fn enter(&mut self, phase: PlaybackPhase) -> Progress {
        let Some(playback) = self.playback.as_mut() else {
            return Progress::Finished;
        };
        playback.phase = phase;
        log::trace!(target: "fukidashi::runtime", "line {} -> {:?}", playback.index, phase);

        match phase {
            PlaybackPhase::Revealing => {
                let text = playback
                    .sequence
                    .get(playback.index)
                    .map(|line| line.text.as_str())
                    .unwrap_or_default();
                self.revealer.start(text, self.stage.text.as_deref_mut())
            }
            PlaybackPhase::Dwelling => {
                playback.delay = Delay::new(self.config.dwell_duration);
                Progress::Running
            }
            PlaybackPhase::Clearing => {
                self.stage.set_text("");
                Progress::Finished
            }
            PlaybackPhase::HidingBubble => self
                .animator
                .hide(self.stage.container.as_deref_mut(), self.config.hide_duration),
            PlaybackPhase::Pausing => {
                playback.delay = Delay::new(self.config.inter_line_pause);
                Progress::Running
            }
            PlaybackPhase::Idle | PlaybackPhase::ShowingBubble => Progress::Finished,
        }
    }

    fn complete(&mut self) {
        let Some(mut playback) = self.playback.take() else {
            return;
        };
        self.animator.stop();
        self.revealer.stop();

        log::debug!(
            target: "fukidashi::runtime",
            "sequence of {} line(s) completed",
            playback.sequence.len()
        );
        record(&mut self.events, PlaybackEvent::SequenceCompleted);
        if let Some(on_complete) = playback.on_complete.take() {
            on_complete(self);
        }
    }
}

impl std::fmt::Debug for DialogSequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogSequencer")
            .field("config", &self.config)
            .field("stage", &self.stage)
            .field("snapshot", &self.snapshot())
            .finish()
    }
}

/// Next step for the line at `playback.index`, or completion past the end
fn line_start(playback: &Playback) -> Next {
    match playback.sequence.get(playback.index) {
        Some(line) => Next::BeginLine(line.mood),
        None => {
            log::warn!(
                target: "fukidashi::runtime",
                "no line at index {}, ending sequence",
                playback.index
            );
            Next::Complete
        }
    }
}

fn record(events: &mut VecDeque<PlaybackEvent>, event: PlaybackEvent) {
    if events.len() >= MAX_PENDING_EVENTS {
        events.pop_front();
    }
    events.push_back(event);
}
