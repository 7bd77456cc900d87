//! Shared recording surfaces for integration tests

#![allow(dead_code)]

use fukidashi::{AssetHandle, BubbleContainer, MoodAssets, MoodImage, MoodTag, Stage, TextSurface};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Everything the targets were told, in order
#[derive(Debug, Default)]
pub struct Recording {
    pub visible: bool,
    pub scale: f32,
    pub text: String,
    pub text_history: Vec<String>,
    pub images: Vec<String>,
}

impl Recording {
    /// Text history with consecutive repeats collapsed
    pub fn distinct_texts(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for text in &self.text_history {
            if out.last() != Some(text) {
                out.push(text.clone());
            }
        }
        out
    }
}

#[derive(Clone, Default)]
pub struct Recorder(pub Rc<RefCell<Recording>>);

impl BubbleContainer for Recorder {
    fn set_visible(&mut self, visible: bool) {
        self.0.borrow_mut().visible = visible;
    }

    fn set_scale(&mut self, scale: f32) {
        self.0.borrow_mut().scale = scale;
    }

    fn scale(&self) -> f32 {
        self.0.borrow().scale
    }
}

impl TextSurface for Recorder {
    fn set_text(&mut self, text: &str) {
        let mut recording = self.0.borrow_mut();
        recording.text = text.to_string();
        recording.text_history.push(text.to_string());
    }
}

impl MoodImage for Recorder {
    fn set_image(&mut self, asset: &AssetHandle) {
        self.0.borrow_mut().images.push(asset.as_str().to_string());
    }
}

pub fn recorded_stage() -> (Stage, Rc<RefCell<Recording>>) {
    let recorder = Recorder::default();
    let recording = recorder.0.clone();
    let stage = Stage::new()
        .with_container(recorder.clone())
        .with_text(recorder.clone())
        .with_mood_image(recorder);
    (stage, recording)
}

pub fn portraits() -> MoodAssets {
    MoodTag::ALL
        .iter()
        .fold(MoodAssets::new(), |assets, mood| assets.with(*mood, mood.as_str()))
}

/// Callback that counts its invocations, for either the director or the sequencer
pub fn counting_callback<T>() -> (Rc<Cell<u32>>, impl FnOnce(&mut T) + 'static)
where
    T: ?Sized + 'static,
{
    let calls = Rc::new(Cell::new(0));
    let handle = calls.clone();
    (calls, move |_: &mut T| handle.set(handle.get() + 1))
}
