//! Local search optimizers for improving CVRP solutions.
//!
//! - [`IntraRouteOptimizer`] — Intra-route 2-opt segment reversal
//! - [`InterRouteOptimizer`] — Customer relocation within and across routes
//! - [`ImprovementPolicy`] — First- vs best-improvement move selection

mod policy;
mod relocate;
mod two_opt;

pub use policy::ImprovementPolicy;
pub use relocate::InterRouteOptimizer;
pub use two_opt::IntraRouteOptimizer;
