//! Typewriter text reveal
//!
//! Clears the text, waits a lead-in delay, then shows one more grapheme per
//! tick delay: prefix 0, 1, ... up to the full text, with one last delay
//! after the full text. Graphemes are extended grapheme clusters, so
//! combined emoji and accented or non-Latin glyphs never appear half-drawn.

use crate::surface::TextSurface;
use crate::timing::{Delay, Progress};
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    LeadIn(Delay),
    Unit(Delay),
}

/// Reveals a string into a [`TextSurface`] one grapheme at a time
#[derive(Debug)]
pub struct TextRevealer {
    lead_in: f32,
    tick_delay: f32,
    text: String,
    /// Byte offset where each grapheme ends
    ends: Vec<usize>,
    shown: usize,
    phase: Option<Phase>,
}

impl TextRevealer {
    pub fn new(lead_in: f32, tick_delay: f32) -> Self {
        Self {
            lead_in,
            tick_delay,
            text: String::new(),
            ends: Vec::new(),
            shown: 0,
            phase: None,
        }
    }

    /// Clear the surface and begin the lead-in for `full_text`
    ///
    /// Finishes immediately when there is no surface.
    pub fn start<T>(&mut self, full_text: &str, surface: Option<&mut T>) -> Progress
    where
        T: TextSurface + ?Sized,
    {
        self.text = full_text.to_string();
        self.ends = grapheme_ends(full_text);
        self.shown = 0;

        let Some(surface) = surface else {
            self.phase = None;
            return Progress::Finished;
        };
        surface.set_text("");
        self.phase = Some(Phase::LeadIn(Delay::new(self.lead_in)));
        Progress::Running
    }

    /// Advance the reveal by `dt` seconds
    pub fn tick<T>(&mut self, dt: f32, surface: Option<&mut T>) -> Progress
    where
        T: TextSurface + ?Sized,
    {
        let Some(phase) = self.phase.as_mut() else {
            return Progress::Finished;
        };
        let Some(surface) = surface else {
            self.phase = None;
            return Progress::Finished;
        };

        match phase {
            Phase::LeadIn(delay) => {
                if delay.tick(dt).is_finished() {
                    self.shown = 0;
                    surface.set_text("");
                    self.phase = Some(Phase::Unit(Delay::new(self.tick_delay)));
                }
                Progress::Running
            }
            Phase::Unit(delay) => {
                if !delay.tick(dt).is_finished() {
                    return Progress::Running;
                }
                if self.shown >= self.ends.len() {
                    self.phase = None;
                    return Progress::Finished;
                }
                *delay = Delay::new(self.tick_delay);
                self.shown += 1;
                surface.set_text(self.displayed());
                Progress::Running
            }
        }
    }

    /// Jump straight to the full text; returns whether a reveal was running
    pub fn skip<T>(&mut self, surface: Option<&mut T>) -> bool
    where
        T: TextSurface + ?Sized,
    {
        if self.phase.take().is_none() {
            return false;
        }
        self.shown = self.ends.len();
        if let Some(surface) = surface {
            surface.set_text(&self.text);
        }
        true
    }

    /// Abandon the running reveal; the surface keeps whatever it shows
    pub fn stop(&mut self) {
        self.phase = None;
    }

    pub fn is_revealing(&self) -> bool {
        self.phase.is_some()
    }

    /// Prefix revealed so far
    pub fn displayed(&self) -> &str {
        match self.shown {
            0 => "",
            n => &self.text[..self.ends[n - 1]],
        }
    }

    /// Number of graphemes in the text being revealed
    pub fn unit_count(&self) -> usize {
        self.ends.len()
    }
}

fn grapheme_ends(text: &str) -> Vec<usize> {
    text.grapheme_indices(true)
        .map(|(start, grapheme)| start + grapheme.len())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        history: Vec<String>,
    }

    impl TextSurface for Recorder {
        fn set_text(&mut self, text: &str) {
            self.history.push(text.to_string());
        }
    }

    fn run_to_end(revealer: &mut TextRevealer, surface: &mut Recorder, dt: f32) -> usize {
        let mut ticks = 0;
        while revealer.tick(dt, Some(&mut *surface)) == Progress::Running {
            ticks += 1;
            assert!(ticks < 10_000, "reveal never finished");
        }
        ticks + 1
    }

    #[test]
    fn reveals_prefixes_in_order() {
        let mut surface = Recorder::default();
        let mut revealer = TextRevealer::new(0.1, 0.1);

        revealer.start("AB", Some(&mut surface));
        let ticks = run_to_end(&mut revealer, &mut surface, 0.1);

        assert_eq!(surface.history, vec!["", "", "A", "AB"]);
        // lead-in, two graphemes, trailing delay
        assert_eq!(ticks, 4);
    }

    #[test]
    fn waits_for_lead_in_before_first_prefix() {
        let mut surface = Recorder::default();
        let mut revealer = TextRevealer::new(0.25, 0.1);
        revealer.start("Hi", Some(&mut surface));

        revealer.tick(0.1, Some(&mut surface));
        revealer.tick(0.1, Some(&mut surface));
        assert_eq!(surface.history, vec![""]);

        revealer.tick(0.1, Some(&mut surface));
        assert_eq!(surface.history, vec!["", ""]);
    }

    #[test]
    fn grapheme_clusters_are_never_split() {
        let mut surface = Recorder::default();
        let mut revealer = TextRevealer::new(0.0, 0.0);
        let text = "e\u{301}👍🏽あ";

        revealer.start(text, Some(&mut surface));
        assert_eq!(revealer.unit_count(), 3);
        run_to_end(&mut revealer, &mut surface, 1.0);

        assert_eq!(
            surface.history,
            vec!["", "", "e\u{301}", "e\u{301}👍🏽", "e\u{301}👍🏽あ"]
        );
    }

    #[test]
    fn skip_shows_full_text() {
        let mut surface = Recorder::default();
        let mut revealer = TextRevealer::new(0.1, 0.1);
        revealer.start("こんにちは", Some(&mut surface));
        revealer.tick(0.1, Some(&mut surface));

        assert!(revealer.skip(Some(&mut surface)));
        assert_eq!(surface.history.last().map(String::as_str), Some("こんにちは"));
        assert_eq!(revealer.displayed(), "こんにちは");
        assert!(!revealer.is_revealing());
        assert!(!revealer.skip(Some(&mut surface)));
    }

    #[test]
    fn missing_surface_finishes_immediately() {
        let mut revealer = TextRevealer::new(0.1, 0.1);
        assert_eq!(
            revealer.start("text", None::<&mut Recorder>),
            Progress::Finished
        );
        assert!(!revealer.is_revealing());
    }

    #[test]
    fn empty_text_only_waits() {
        let mut surface = Recorder::default();
        let mut revealer = TextRevealer::new(0.1, 0.1);
        revealer.start("", Some(&mut surface));
        let ticks = run_to_end(&mut revealer, &mut surface, 0.1);
        assert_eq!(surface.history, vec!["", ""]);
        assert_eq!(ticks, 2);
    }
}
