//! Stage outcome handed over by the game when a stage ends

use serde::{Deserialize, Serialize};

/// Result of one stage, used only to pick dialog content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// 1-based stage number
    pub stage: u32,
    /// Quantity the player reached
    pub achieved: i64,
    /// Quantity the stage asked for
    pub goal: i64,
}

impl Outcome {
    pub fn new(stage: u32, achieved: i64, goal: i64) -> Self {
        Self {
            stage,
            achieved,
            goal,
        }
    }

    /// Achieved divided by goal
    ///
    /// A non-positive goal is a caller contract violation and reads as no
    /// progress. Negative achievement is clamped to zero.
    pub fn ratio(&self) -> f64 {
        if self.goal <= 0 {
            return 0.0;
        }
        self.achieved.max(0) as f64 / self.goal as f64
    }
}
