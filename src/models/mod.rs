//! Domain model types for capacitated vehicle routing.
//!
//! Provides the core abstractions: nodes with demands, depot-bookended
//! routes with their mutation primitives, capacitated vehicles, solutions
//! as ordered vehicle collections, and the problem instance.

mod node;
mod problem;
mod route;
mod sequence;
mod solution;
mod vehicle;

pub use node::Node;
pub use problem::{CvrpProblem, RoutingProblem};
pub use route::Route;
pub use solution::{Solution, Violation, ViolationType};
pub use vehicle::Vehicle;
