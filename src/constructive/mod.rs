//! Constructive heuristics for building initial feasible solutions.
//!
//! - [`one_route_per_customer`] — Each customer on its own vehicle, O(n)
//! - [`nearest_neighbor`] — Greedy nearest-neighbor insertion, O(n²)

mod nearest_neighbor;
mod single;

pub use nearest_neighbor::nearest_neighbor;
pub use single::one_route_per_customer;
