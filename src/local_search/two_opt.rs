//! Intra-route 2-opt improvement.
//!
//! # Algorithm
//!
//! For every pair of positions `0 < a < b < len - 1`, evaluate reversing the
//! segment `a..=b`, which replaces arcs `(a-1, a)` and `(b, b+1)` with
//! `(a-1, b)` and `(a, b+1)`:
//!
//! ```text
//! delta = d(r[a-1], r[b]) + d(r[a], r[b+1]) - d(r[a-1], r[a]) - d(r[b], r[b+1])
//!       + (reversed inner arcs - original inner arcs)
//! ```
//!
//! The inner term vanishes on symmetric matrices. It is accumulated while
//! `b` grows, so each candidate costs O(1).
//!
//! A move qualifies when `-delta` exceeds the gain threshold. Each route is
//! improved until no move qualifies.
//!
//! # Complexity
//!
//! O(n²) per scan.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use tracing::trace;

use super::ImprovementPolicy;
use crate::distance::CostMatrix;
use crate::error::Result;
use crate::models::{Route, Solution};

#[derive(Debug, Clone, Copy)]
struct TwoOptMove {
    a: usize,
    b: usize,
    gain: f64,
}

/// Improves each route independently with 2-opt reversals.
///
/// Never changes which customers belong to which route.
///
/// # Examples
///
/// ```
/// use u_cvrp_ls::distance::DistanceMatrix;
/// use u_cvrp_ls::local_search::{ImprovementPolicy, IntraRouteOptimizer};
/// use u_cvrp_ls::models::{Node, Route};
///
/// // depot and three customers on a line; visiting order 2, 1, 3 backtracks
/// let dm = DistanceMatrix::from_coordinates(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
/// let d = Node::depot(0);
/// let mut route = Route::new([d, Node::customer(2, 1), Node::customer(1, 1), Node::customer(3, 1), d]);
///
/// let opt = IntraRouteOptimizer::new(&dm, 1e-9);
/// opt.optimize_route(&mut route, ImprovementPolicy::BestImprovement).unwrap();
/// assert_eq!(route.node_ids(), vec![0, 1, 2, 3, 0]);
/// ```
pub struct IntraRouteOptimizer<'a> {
    costs: &'a dyn CostMatrix,
    gain_delta: f64,
}

impl<'a> IntraRouteOptimizer<'a> {
    /// Creates an optimizer; a move must save more than `gain_delta`.
    pub fn new(costs: &'a dyn CostMatrix, gain_delta: f64) -> Self {
        Self { costs, gain_delta }
    }

    /// Runs 2-opt on every route of the solution.
    ///
    /// Returns the number of reversals applied.
    pub fn two_opt(&self, solution: &mut Solution, policy: ImprovementPolicy) -> Result<usize> {
        let mut moves = 0;
        for vehicle in solution.vehicles_mut() {
            moves += self.optimize_route(vehicle.route_mut(), policy)?;
        }
        Ok(moves)
    }

    /// Runs 2-opt on a single route until it reaches a local optimum.
    ///
    /// Returns the number of reversals applied.
    pub fn optimize_route(&self, route: &mut Route, policy: ImprovementPolicy) -> Result<usize> {
        let mut moves = 0;
        while let Some(mv) = self.find_move(route, policy) {
            trace!(a = mv.a, b = mv.b, gain = mv.gain, "2-opt reversal");
            route.reverse_segment(mv.a, mv.b)?;
            moves += 1;
        }
        Ok(moves)
    }

    fn find_move(&self, route: &Route, policy: ImprovementPolicy) -> Option<TwoOptMove> {
        let r = route.nodes();
        let n = r.len();
        if n < 4 {
            return None;
        }
        let c = |from: usize, to: usize| self.costs.cost(r[from].id(), r[to].id());

        let mut best: Option<TwoOptMove> = None;
        for a in 1..n - 2 {
            let mut inner = 0.0;
            for b in a + 1..n - 1 {
                inner += c(b, b - 1) - c(b - 1, b);
                let delta = c(a - 1, b) + c(a, b + 1) - c(a - 1, a) - c(b, b + 1) + inner;
                let gain = -delta;
                if gain <= self.gain_delta {
                    continue;
                }
                let mv = TwoOptMove { a, b, gain };
                match policy {
                    ImprovementPolicy::FirstImprovement => return Some(mv),
                    ImprovementPolicy::BestImprovement => {
                        if best.is_none_or(|m| gain > m.gain) {
                            best = Some(mv);
                        }
                    }
                }
            }
        }
        best
    }
}
