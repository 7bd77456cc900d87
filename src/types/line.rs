//! Dialog lines and the sequences they form

use serde::{Deserialize, Serialize};

/// Expression selector for the speaker portrait
///
/// The sequencer never interprets a mood; it only uses it as a lookup key
/// into [`crate::surface::MoodAssets`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodTag {
    Normal,
    Happy,
    Sad,
    Encouraging,
    Surprised,
}

impl MoodTag {
    /// Every mood, in declaration order
    pub const ALL: [MoodTag; 5] = [
        MoodTag::Normal,
        MoodTag::Happy,
        MoodTag::Sad,
        MoodTag::Encouraging,
        MoodTag::Surprised,
    ];

    /// Stable lowercase name, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodTag::Normal => "normal",
            MoodTag::Happy => "happy",
            MoodTag::Sad => "sad",
            MoodTag::Encouraging => "encouraging",
            MoodTag::Surprised => "surprised",
        }
    }
}

/// One unit of narrated text with the mood it is spoken in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogLine {
    pub text: String,
    pub mood: MoodTag,
}

impl DialogLine {
    pub fn new(text: impl Into<String>, mood: MoodTag) -> Self {
        Self {
            text: text.into(),
            mood,
        }
    }
}

/// Reasons a list of lines cannot become a [`Sequence`]
#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum SequenceError {
    #[error("a dialog sequence needs at least one line")]
    Empty,
    #[error("dialog line {index} has no text")]
    BlankLine { index: usize },
}

/// Ordered, non-empty list of dialog lines owned by a single playback
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sequence {
    lines: Vec<DialogLine>,
}

impl Sequence {
    /// Build a sequence, rejecting an empty list or a line without text
    pub fn new(lines: Vec<DialogLine>) -> Result<Self, SequenceError> {
        if lines.is_empty() {
            return Err(SequenceError::Empty);
        }
        if let Some(index) = lines.iter().position(|l| l.text.trim().is_empty()) {
            return Err(SequenceError::BlankLine { index });
        }
        Ok(Self { lines })
    }

    /// Build a sequence, substituting the generic fallback when `lines` is unusable
    pub fn or_fallback(lines: Vec<DialogLine>) -> Self {
        match Self::new(lines) {
            Ok(sequence) => sequence,
            Err(err) => {
                log::warn!(target: "fukidashi::content", "using fallback dialog: {err}");
                crate::content::fallback_dialogs()
            }
        }
    }

    /// Caller guarantees `lines` is non-empty and every text is non-blank
    pub(crate) fn from_trusted(lines: Vec<DialogLine>) -> Self {
        debug_assert!(Self::new(lines.clone()).is_ok());
        Self { lines }
    }

    /// Load a host-authored script: a JSON array of `{ "text", "mood" }` objects
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let lines: Vec<DialogLine> = serde_json::from_str(json)?;
        Ok(Self::new(lines)?)
    }

    pub fn lines(&self) -> &[DialogLine] {
        &self.lines
    }

    pub fn get(&self, index: usize) -> Option<&DialogLine> {
        self.lines.get(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DialogLine> {
        self.lines.iter()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a DialogLine;
    type IntoIter = std::slice::Iter<'a, DialogLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
