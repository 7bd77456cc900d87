//! Terminal presentation targets
//!
//! One shared [`ViewState`] backs all three targets; every change redraws
//! the current terminal line. Revealed lines are also printed permanently
//! so the transcript stays readable after the bubble is gone.

use crate::surface::{AssetHandle, BubbleContainer, MoodAssets, MoodImage, Stage, TextSurface};
use crate::types::{MoodTag, PlaybackEvent};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

/// Width of the bubble frame at full scale
const BUBBLE_WIDTH: usize = 6;

/// Emoticon portraits, one per mood
pub fn mood_faces() -> MoodAssets {
    MoodAssets::new()
        .with(MoodTag::Normal, "(・_・)")
        .with(MoodTag::Happy, "(^▽^)")
        .with(MoodTag::Sad, "(;_;)")
        .with(MoodTag::Encouraging, "(•̀ᴗ•́)و")
        .with(MoodTag::Surprised, "(ﾟдﾟ)")
}

/// What the terminal currently shows
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub visible: bool,
    pub scale: f32,
    pub text: String,
    pub face: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-line rendering of the bubble
    pub fn render(&self) -> String {
        if !self.visible {
            return String::new();
        }
        let face = self.face.as_deref().unwrap_or("");
        let filled = (self.scale.clamp(0.0, 1.0) * BUBBLE_WIDTH as f32).round() as usize;
        if filled < BUBBLE_WIDTH {
            format!("{face} {}", "･".repeat(filled))
        } else {
            format!("{face} 「{}」", self.text)
        }
    }
}

/// Cloneable handle to the shared view; each target is one clone
#[derive(Debug, Clone, Default)]
pub struct TerminalScreen {
    view: Rc<RefCell<ViewState>>,
}

impl TerminalScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage whose three targets all draw into this screen
    pub fn stage(&self) -> Stage {
        Stage::new()
            .with_container(self.clone())
            .with_text(self.clone())
            .with_mood_image(self.clone())
    }

    pub fn view(&self) -> ViewState {
        self.view.borrow().clone()
    }

    /// Print revealed lines so they survive the redraws that follow
    pub fn on_event(&self, event: &PlaybackEvent) {
        match event {
            PlaybackEvent::LineRevealed { .. } => {
                let line = self.view.borrow().render();
                print!("\r\x1b[2K{line}\n");
                flush();
            }
            PlaybackEvent::SequenceForceEnded => {
                print!("\r\x1b[2K(skipped)\n");
                flush();
            }
            _ => {}
        }
    }

    fn redraw(&self) {
        print!("\r\x1b[2K{}", self.view.borrow().render());
        flush();
    }
}

impl BubbleContainer for TerminalScreen {
    fn set_visible(&mut self, visible: bool) {
        self.view.borrow_mut().visible = visible;
        self.redraw();
    }

    fn set_scale(&mut self, scale: f32) {
        self.view.borrow_mut().scale = scale;
        self.redraw();
    }

    fn scale(&self) -> f32 {
        self.view.borrow().scale
    }
}

impl TextSurface for TerminalScreen {
    fn set_text(&mut self, text: &str) {
        self.view.borrow_mut().text = text.to_string();
        self.redraw();
    }
}

impl MoodImage for TerminalScreen {
    fn set_image(&mut self, asset: &AssetHandle) {
        self.view.borrow_mut().face = Some(asset.to_string());
        self.redraw();
    }
}

fn flush() {
    // A closed stdout only loses the animation, never the playback
    let _ = std::io::stdout().flush();
}
