//! Solver configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// Stopping rules for the cycle loop.
///
/// # Examples
///
/// ```
/// use u_cvrp_ls::solver::SolverConfig;
///
/// let config = SolverConfig::default().with_max_cycles(20);
/// assert_eq!(config.max_cycles, 20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Upper bound on minimization cycles.
    pub max_cycles: usize,
    /// A cycle must lower the total cost by more than this to continue.
    pub min_improvement: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_cycles: 100,
            min_improvement: 1e-9,
        }
    }
}

impl SolverConfig {
    /// Sets the cycle limit.
    pub fn with_max_cycles(mut self, max_cycles: usize) -> Self {
        self.max_cycles = max_cycles;
        self
    }

    /// Sets the per-cycle improvement threshold.
    pub fn with_min_improvement(mut self, min_improvement: f64) -> Self {
        self.min_improvement = min_improvement;
        self
    }

    /// Rejects a zero cycle limit or a negative threshold.
    pub fn validate(&self) -> Result<()> {
        if self.max_cycles == 0 {
            return Err(RoutingError::InvalidConfig(
                "max_cycles must be at least 1".into(),
            ));
        }
        if !self.min_improvement.is_finite() || self.min_improvement < 0.0 {
            return Err(RoutingError::InvalidConfig(format!(
                "min_improvement must be non-negative, got {}",
                self.min_improvement
            )));
        }
        Ok(())
    }
}
