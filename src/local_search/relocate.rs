//! Customer relocation within and across routes.
//!
//! # Algorithm
//!
//! For each customer `x` between `p` and `q`, removal saves
//! `d(p, x) + d(x, q) - d(p, q)`. Inserting it between `u` and `v` costs
//! `d(u, x) + d(x, v) - d(u, v)`. A move qualifies when the saving minus the
//! insertion cost exceeds the gain threshold and the destination vehicle
//! still fits the customer's demand. Moves inside the source route use
//! [`Route::relocate_node`]; moves across routes remove and insert.
//!
//! Void routes (`[depot, depot]`) are valid destinations, which lets the
//! search open a new vehicle.
//!
//! # Complexity
//!
//! O(n²) per scan where n = number of customers.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use tracing::trace;

use super::ImprovementPolicy;
use crate::distance::CostMatrix;
use crate::error::Result;
use crate::models::Solution;

/// Moves the customer at `from_pos` of vehicle `from` so that it follows the
/// node at `after_pos` of vehicle `to`.
#[derive(Debug, Clone, Copy)]
struct RelocateMove {
    from: usize,
    from_pos: usize,
    to: usize,
    after_pos: usize,
    gain: f64,
}

/// Improves a whole solution by relocating customers.
///
/// # Examples
///
/// ```
/// use u_cvrp_ls::distance::DistanceMatrix;
/// use u_cvrp_ls::local_search::{ImprovementPolicy, InterRouteOptimizer};
/// use u_cvrp_ls::models::{Node, Route, Solution, Vehicle};
///
/// let dm = DistanceMatrix::from_coordinates(&[(0.0, 0.0), (10.0, 0.0), (11.0, 0.0)]);
/// let d = Node::depot(0);
/// let mut sol = Solution::from_vehicles(vec![
///     Vehicle::new(10, Route::new([d, Node::customer(1, 5), d])),
///     Vehicle::new(10, Route::new([d, Node::customer(2, 4), d])),
/// ]);
///
/// let opt = InterRouteOptimizer::new(&dm, 1e-9);
/// opt.relocate(&mut sol, ImprovementPolicy::BestImprovement).unwrap();
/// assert_eq!(sol.remove_void_vehicles(), 1);
/// assert!((sol.cost(&dm) - 22.0).abs() < 1e-10);
/// ```
pub struct InterRouteOptimizer<'a> {
    costs: &'a dyn CostMatrix,
    gain_delta: f64,
}

impl<'a> InterRouteOptimizer<'a> {
    /// Creates an optimizer; a move must save more than `gain_delta`.
    pub fn new(costs: &'a dyn CostMatrix, gain_delta: f64) -> Self {
        Self { costs, gain_delta }
    }

    /// Relocates customers until no qualifying move remains.
    ///
    /// Returns the number of moves applied.
    pub fn relocate(&self, solution: &mut Solution, policy: ImprovementPolicy) -> Result<usize> {
        let mut moves = 0;
        while let Some(mv) = self.find_move(solution, policy) {
            trace!(
                from = mv.from,
                from_pos = mv.from_pos,
                to = mv.to,
                after_pos = mv.after_pos,
                gain = mv.gain,
                "relocate"
            );
            apply(solution, &mv)?;
            moves += 1;
        }
        Ok(moves)
    }

    fn find_move(&self, solution: &Solution, policy: ImprovementPolicy) -> Option<RelocateMove> {
        let vehicles = solution.vehicles();
        let loads: Vec<i32> = vehicles.iter().map(|v| v.load()).collect();
        let mut best: Option<RelocateMove> = None;

        for (s, source) in vehicles.iter().enumerate() {
            let src = source.route().nodes();
            for i in 1..src.len().saturating_sub(1) {
                let x = src[i];
                let saving = self.arc(src[i - 1].id(), x.id()) + self.arc(x.id(), src[i + 1].id())
                    - self.arc(src[i - 1].id(), src[i + 1].id());

                for (t, dest) in vehicles.iter().enumerate() {
                    if t != s && loads[t] + x.demand() > dest.capacity() {
                        continue;
                    }
                    let dst = dest.route().nodes();
                    for j in 0..dst.len().saturating_sub(1) {
                        // same position, nothing moves
                        if t == s && (j == i || j + 1 == i) {
                            continue;
                        }
                        let (u, v) = (dst[j].id(), dst[j + 1].id());
                        let insertion = self.arc(u, x.id()) + self.arc(x.id(), v) - self.arc(u, v);
                        let gain = saving - insertion;
                        if gain <= self.gain_delta {
                            continue;
                        }
                        let mv = RelocateMove {
                            from: s,
                            from_pos: i,
                            to: t,
                            after_pos: j,
                            gain,
                        };
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
            }
        }
        best
    }

    fn arc(&self, from: usize, to: usize) -> f64 {
        self.costs.cost(from, to)
    }
}

fn apply(solution: &mut Solution, mv: &RelocateMove) -> Result<()> {
    let vehicles = solution.vehicles_mut();
    if mv.from == mv.to {
        return vehicles[mv.from]
            .route_mut()
            .relocate_node(mv.from_pos, mv.after_pos);
    }
    let node = vehicles[mv.from].route_mut().remove_at(mv.from_pos)?;
    vehicles[mv.to].route_mut().insert_at(mv.after_pos + 1, [node])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::{Node, Route, Vehicle};

    fn vehicle(capacity: i32, customers: &[(usize, i32)]) -> Vehicle {
        let d = Node::depot(0);
        let mut nodes = vec![d];
        nodes.extend(customers.iter().map(|&(id, q)| Node::customer(id, q)));
        nodes.push(d);
        Vehicle::new(capacity, Route::new(nodes))
    }

    fn line() -> DistanceMatrix {
        DistanceMatrix::from_coordinates(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)])
    }

    #[test]
    fn test_relocate_merges_routes() {
        let dm = line();
        let mut sol = Solution::from_vehicles(vec![
            vehicle(100, &[(1, 10), (2, 10)]),
            vehicle(100, &[(3, 10)]),
        ]);
        let before = sol.cost(&dm);
        for policy in [
            ImprovementPolicy::FirstImprovement,
            ImprovementPolicy::BestImprovement,
        ] {
            let mut candidate = sol.clone();
            let opt = InterRouteOptimizer::new(&dm, 1e-9);
            let moves = opt.relocate(&mut candidate, policy).expect("valid moves");
            assert!(moves > 0);
            assert!(candidate.cost(&dm) < before - 1e-9);
            assert_eq!(candidate.num_customers(), 3);
        }
        InterRouteOptimizer::new(&dm, 1e-9)
            .relocate(&mut sol, ImprovementPolicy::BestImprovement)
            .expect("valid moves");
        sol.remove_void_vehicles();
        assert_eq!(sol.num_vehicles(), 1);
        assert!((sol.cost(&dm) - 6.0).abs() < 1e-10);
        assert!(sol.is_valid());
    }

    #[test]
    fn test_relocate_respects_capacity() {
        let dm = line();
        let mut sol = Solution::from_vehicles(vec![
            vehicle(15, &[(1, 10)]),
            vehicle(15, &[(2, 10)]),
            vehicle(15, &[(3, 10)]),
        ]);
        let opt = InterRouteOptimizer::new(&dm, 1e-9);
        let moves = opt
            .relocate(&mut sol, ImprovementPolicy::BestImprovement)
            .expect("valid moves");
        assert_eq!(moves, 0);
        for v in sol.vehicles() {
            assert!(v.load() <= v.capacity());
        }
    }

    #[test]
    fn test_relocate_within_route() {
        // 0 → 2 → 1 → 3 → 0 backtracks; moving 2 after 1 fixes it
        let dm = line();
        let mut sol = Solution::from_vehicles(vec![vehicle(100, &[(2, 1), (1, 1), (3, 1)])]);
        let opt = InterRouteOptimizer::new(&dm, 1e-9);
        let moves = opt
            .relocate(&mut sol, ImprovementPolicy::FirstImprovement)
            .expect("valid moves");
        assert!(moves > 0);
        assert!((sol.cost(&dm) - 6.0).abs() < 1e-10);
        assert_eq!(sol.num_vehicles(), 1);
    }

    #[test]
    fn test_relocate_into_void_route() {
        // customer 2 sits far from customer 1 but close to the depot:
        // serving it alone is cheaper than the detour
        let mut dm = DistanceMatrix::new(3);
        let arcs = [
            (0, 1, 10.0),
            (1, 0, 10.0),
            (0, 2, 1.0),
            (2, 0, 1.0),
            (1, 2, 50.0),
            (2, 1, 50.0),
        ];
        for (i, j, d) in arcs {
            dm.set(i, j, d);
        }
        let mut sol = Solution::from_vehicles(vec![vehicle(100, &[(1, 5), (2, 5)])]);
        sol.add_vehicle(Vehicle::void(100, Node::depot(0)));
        let opt = InterRouteOptimizer::new(&dm, 1e-9);
        opt.relocate(&mut sol, ImprovementPolicy::BestImprovement)
            .expect("valid moves");
        assert_eq!(sol.remove_void_vehicles(), 0);
        assert_eq!(sol.num_vehicles(), 2);
        assert!((sol.cost(&dm) - 22.0).abs() < 1e-10);
        assert!(sol.is_valid());
    }

    #[test]
    fn test_relocate_threshold_blocks_small_gains() {
        let dm = line();
        let mut sol = Solution::from_vehicles(vec![
            vehicle(100, &[(1, 10), (2, 10)]),
            vehicle(100, &[(3, 10)]),
        ]);
        let opt = InterRouteOptimizer::new(&dm, 1e3);
        assert_eq!(
            opt.relocate(&mut sol, ImprovementPolicy::FirstImprovement)
                .expect("valid"),
            0
        );
    }
}
