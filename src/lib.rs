//! # u-cvrp-ls
//!
//! Local search for the Capacitated Vehicle Routing Problem. Starting from
//! a feasible assignment of customers to vehicles, repeated minimization
//! cycles apply 2-opt and relocate moves until a local optimum is reached.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Node, Route, Vehicle, Solution, Problem)
//! - [`distance`] — Cost lookup trait and dense distance matrix
//! - [`evaluation`] — Solution cost and feasibility checking
//! - [`constructive`] — Initial solutions (one route per customer, nearest neighbor)
//! - [`local_search`] — Intra-route 2-opt and inter-route relocate optimizers
//! - [`strategy`] — Minimization cycle orchestrating both optimizers
//! - [`solver`] — Repeats minimization cycles until convergence

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod solver;
pub mod strategy;

pub use error::{Result, RoutingError};
