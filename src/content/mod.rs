//! Content selection: stage outcome in, dialog sequence out
//!
//! Pure and deterministic. Stage numbers are grouped into bands, the
//! achievement ratio into buckets, and each (band, bucket) pair owns a fixed
//! table of lines in [`tables`].

use crate::types::{DialogLine, Outcome, Sequence};

pub mod tables;

use tables::Table;

/// Last stage of the game; reaching it puts an outcome in [`StageBand::Final`]
pub const FINAL_STAGE: u32 = 10;

/// Ratio at or above which an outcome counts as near-complete
pub const NEAR_COMPLETE_RATIO: f64 = 0.9;

/// Ratio at or above which an outcome counts as moderate
pub const MODERATE_RATIO: f64 = 0.5;

/// Coarse grouping of stage progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageBand {
    /// Stages 1 to 3
    Early,
    /// Stages 4 to 6
    Mid,
    /// Stages 7 up to the one before [`FINAL_STAGE`]
    Late,
    /// [`FINAL_STAGE`] and beyond
    Final,
}

impl StageBand {
    pub fn from_stage(stage: u32) -> Self {
        match stage {
            s if s >= FINAL_STAGE => StageBand::Final,
            7.. => StageBand::Late,
            4.. => StageBand::Mid,
            _ => StageBand::Early,
        }
    }
}

/// Achievement ratio bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatioBucket {
    /// ratio >= 0.9
    NearComplete,
    /// ratio >= 0.5
    Moderate,
    /// ratio > 0
    SomeProgress,
    /// ratio == 0
    NoProgress,
}

impl RatioBucket {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= NEAR_COMPLETE_RATIO {
            RatioBucket::NearComplete
        } else if ratio >= MODERATE_RATIO {
            RatioBucket::Moderate
        } else if ratio > 0.0 {
            RatioBucket::SomeProgress
        } else {
            // NaN and anything non-positive land here
            RatioBucket::NoProgress
        }
    }
}

/// Table for a (band, bucket) pair
pub fn table_for(band: StageBand, bucket: RatioBucket) -> Table {
    use RatioBucket::*;
    use StageBand::*;

    match (band, bucket) {
        (Early, NearComplete) => tables::EARLY_NEAR_COMPLETE,
        (Early, Moderate) => tables::EARLY_MODERATE,
        (Early, SomeProgress) => tables::EARLY_SOME_PROGRESS,
        (Early, NoProgress) => tables::EARLY_NO_PROGRESS,
        (Mid, NearComplete) => tables::MID_NEAR_COMPLETE,
        (Mid, Moderate) => tables::MID_MODERATE,
        (Mid, SomeProgress) => tables::MID_SOME_PROGRESS,
        (Mid, NoProgress) => tables::MID_NO_PROGRESS,
        (Late, NearComplete) => tables::LATE_NEAR_COMPLETE,
        (Late, Moderate) => tables::LATE_MODERATE,
        (Late, SomeProgress) => tables::LATE_SOME_PROGRESS,
        (Late, NoProgress) => tables::LATE_NO_PROGRESS,
        (Final, NearComplete) => tables::FINAL_NEAR_COMPLETE,
        (Final, Moderate) => tables::FINAL_MODERATE,
        (Final, SomeProgress) => tables::FINAL_SOME_PROGRESS,
        (Final, NoProgress) => tables::FINAL_NO_PROGRESS,
    }
}

/// Pick the dialog for a finished stage
///
/// Total: an unusable table falls back to [`fallback_dialogs`].
pub fn select_dialogs(outcome: &Outcome) -> Sequence {
    if outcome.goal <= 0 {
        log::warn!(
            target: "fukidashi::content",
            "non-positive goal {} for stage {}, treating as no progress",
            outcome.goal,
            outcome.stage
        );
    }
    if outcome.stage == 0 {
        log::warn!(target: "fukidashi::content", "stage 0 is not a valid stage, using early band");
    }

    let band = StageBand::from_stage(outcome.stage);
    let bucket = RatioBucket::from_ratio(outcome.ratio());
    log::debug!(
        target: "fukidashi::content",
        "stage {} ratio {:.3} -> {:?}/{:?}",
        outcome.stage,
        outcome.ratio(),
        band,
        bucket
    );

    Sequence::or_fallback(to_lines(table_for(band, bucket)))
}

/// Celebration for clearing the final stage, independent of any ratio
pub fn final_clear_dialogs() -> Sequence {
    Sequence::or_fallback(to_lines(tables::FINAL_CLEAR))
}

/// Generic two-line sequence used when nothing better is available
pub fn fallback_dialogs() -> Sequence {
    Sequence::from_trusted(to_lines(tables::FALLBACK))
}

fn to_lines(table: Table) -> Vec<DialogLine> {
    table
        .iter()
        .map(|(text, mood)| DialogLine::new(*text, *mood))
        .collect()
}
