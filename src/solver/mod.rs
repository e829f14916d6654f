//! Repeated minimization until convergence.
//!
//! A single [`Strategy::minimize`](crate::strategy::Strategy::minimize) call
//! reaches a local optimum of its own passes; with shuffling enabled, or
//! because relocation can reopen 2-opt moves, further cycles may still
//! lower the cost. [`Solver`] repeats cycles until one stops paying off.

mod config;
mod runner;

pub use config::SolverConfig;
pub use runner::{SolveReport, Solver};
