//! Travel cost lookup.
//!
//! Provides the [`CostMatrix`] trait consumed by routes and optimizers, and
//! a dense [`DistanceMatrix`] implementing it.

mod matrix;

pub use matrix::{CostMatrix, DistanceMatrix};
