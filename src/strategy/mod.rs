//! Minimization cycle orchestration.
//!
//! - [`Strategy`] — One improvement cycle over a solution
//! - [`SimpleStrategy`] — 2-opt, void-route injection, relocate, cleanup
//! - [`StrategyConfig`] — Policies, shuffle, and gain threshold

mod config;
mod simple;

pub use config::StrategyConfig;
pub use simple::SimpleStrategy;

use crate::error::Result;
use crate::models::Solution;

/// Drives one minimization cycle over a solution, mutating it in place.
pub trait Strategy {
    /// Improves `solution` until the strategy's neighborhoods converge.
    ///
    /// On error the solution must be considered corrupt.
    fn minimize(&mut self, solution: &mut Solution) -> Result<()>;
}
