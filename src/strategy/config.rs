//! Strategy configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};
use crate::local_search::ImprovementPolicy;

/// Options for one minimization cycle.
///
/// # Examples
///
/// ```
/// use u_cvrp_ls::local_search::ImprovementPolicy;
/// use u_cvrp_ls::strategy::StrategyConfig;
///
/// let config = StrategyConfig::default()
///     .with_two_opt(ImprovementPolicy::FirstImprovement)
///     .with_shuffle(true)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.relocate, ImprovementPolicy::BestImprovement);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Move selection for the intra-route 2-opt pass.
    pub two_opt: ImprovementPolicy,
    /// Move selection for the inter-route relocate pass.
    pub relocate: ImprovementPolicy,
    /// Randomly permute vehicle order before each cycle.
    pub shuffle: bool,
    /// Minimum cost reduction for a move to count as an improvement.
    pub gain_delta: f64,
    /// Seed for the shuffle generator.
    pub seed: u64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            two_opt: ImprovementPolicy::BestImprovement,
            relocate: ImprovementPolicy::BestImprovement,
            shuffle: false,
            gain_delta: 1e-9,
            seed: 42,
        }
    }
}

impl StrategyConfig {
    /// Sets the 2-opt policy.
    pub fn with_two_opt(mut self, policy: ImprovementPolicy) -> Self {
        self.two_opt = policy;
        self
    }

    /// Sets the relocate policy.
    pub fn with_relocate(mut self, policy: ImprovementPolicy) -> Self {
        self.relocate = policy;
        self
    }

    /// Enables or disables vehicle shuffling.
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Sets the gain threshold.
    pub fn with_gain_delta(mut self, gain_delta: f64) -> Self {
        self.gain_delta = gain_delta;
        self
    }

    /// Sets the shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Rejects a gain threshold that is not a small positive number.
    pub fn validate(&self) -> Result<()> {
        if !self.gain_delta.is_finite() || self.gain_delta <= 0.0 {
            return Err(RoutingError::InvalidConfig(format!(
                "gain_delta must be positive and finite, got {}",
                self.gain_delta
            )));
        }
        Ok(())
    }
}
