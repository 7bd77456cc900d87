//! Presentation targets - where dialogs end up on screen
//!
//! The sequencer only talks to the three traits below. Hosts implement them
//! on top of whatever scene graph they use; any of them may be absent, in
//! which case the matching visual step is skipped.

use crate::types::MoodTag;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Container that pops in and out around the dialog text
pub trait BubbleContainer {
    fn set_visible(&mut self, visible: bool);

    fn set_scale(&mut self, scale: f32);

    /// Current uniform scale
    fn scale(&self) -> f32;
}

/// Mutable text the dialog is typed into
pub trait TextSurface {
    fn set_text(&mut self, text: &str);
}

/// Image showing the speaker's expression
pub trait MoodImage {
    fn set_image(&mut self, asset: &AssetHandle);
}

/// Opaque reference to a host asset (sprite name, path, atlas key...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetHandle(String);

impl AssetHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetHandle {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for AssetHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Mood to asset lookup, resolved by the host before dialogs start
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoodAssets {
    assets: HashMap<MoodTag, AssetHandle>,
}

impl MoodAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration
    pub fn with(mut self, mood: MoodTag, asset: impl Into<AssetHandle>) -> Self {
        self.insert(mood, asset);
        self
    }

    pub fn insert(&mut self, mood: MoodTag, asset: impl Into<AssetHandle>) {
        self.assets.insert(mood, asset.into());
    }

    pub fn resolve(&self, mood: MoodTag) -> Option<&AssetHandle> {
        self.assets.get(&mood)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// The set of targets one sequencer owns exclusively
#[derive(Default)]
pub struct Stage {
    pub container: Option<Box<dyn BubbleContainer>>,
    pub text: Option<Box<dyn TextSurface>>,
    pub mood_image: Option<Box<dyn MoodImage>>,
}

impl Stage {
    /// A stage with no targets at all; every visual step is skipped
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(mut self, container: impl BubbleContainer + 'static) -> Self {
        self.container = Some(Box::new(container));
        self
    }

    pub fn with_text(mut self, text: impl TextSurface + 'static) -> Self {
        self.text = Some(Box::new(text));
        self
    }

    pub fn with_mood_image(mut self, image: impl MoodImage + 'static) -> Self {
        self.mood_image = Some(Box::new(image));
        self
    }

    pub(crate) fn set_text(&mut self, text: &str) {
        if let Some(surface) = self.text.as_deref_mut() {
            surface.set_text(text);
        }
    }

    pub(crate) fn set_mood(&mut self, asset: Option<&AssetHandle>) {
        if let (Some(image), Some(asset)) = (self.mood_image.as_deref_mut(), asset) {
            image.set_image(asset);
        }
    }

    /// Hide the container immediately, without animation
    pub(crate) fn hide_now(&mut self) {
        if let Some(container) = self.container.as_deref_mut() {
            container.set_scale(0.0);
            container.set_visible(false);
        }
    }

    pub(crate) fn container_scale(&self) -> f32 {
        self.container.as_deref().map(|c| c.scale()).unwrap_or(0.0)
    }
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("container", &self.container.is_some())
            .field("text", &self.text.is_some())
            .field("mood_image", &self.mood_image.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_assets_resolve_registered_moods_only() {
        let assets = MoodAssets::new()
            .with(MoodTag::Normal, "face_normal")
            .with(MoodTag::Sad, "face_sad");

        assert_eq!(assets.len(), 2);
        assert_eq!(
            assets.resolve(MoodTag::Sad).map(AssetHandle::as_str),
            Some("face_sad")
        );
        assert!(assets.resolve(MoodTag::Surprised).is_none());
    }

    #[test]
    fn mood_assets_from_json() {
        let json = r#"{"normal": "portrait/normal.png", "encouraging": "portrait/cheer.png"}"#;
        let assets: MoodAssets = serde_json::from_str(json).unwrap();
        assert_eq!(
            assets.resolve(MoodTag::Encouraging),
            Some(&AssetHandle::new("portrait/cheer.png"))
        );
    }

    #[test]
    fn empty_stage_ignores_every_call() {
        let mut stage = Stage::new();
        stage.set_text("hello");
        stage.set_mood(Some(&AssetHandle::new("x")));
        stage.hide_now();
        assert_eq!(stage.container_scale(), 0.0);
    }
}
