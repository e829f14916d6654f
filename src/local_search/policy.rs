//! Move acceptance policy shared by the optimizers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How an optimizer picks the move to apply from a neighborhood scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImprovementPolicy {
    /// Apply the first qualifying move in scan order, then rescan.
    FirstImprovement,
    /// Scan the whole neighborhood and apply the largest qualifying gain.
    #[default]
    BestImprovement,
}

impl fmt::Display for ImprovementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstImprovement => write!(f, "FIRST_IMPROVEMENT"),
            Self::BestImprovement => write!(f, "BEST_IMPROVEMENT"),
        }
    }
}
