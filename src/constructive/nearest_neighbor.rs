//! Nearest-neighbor constructive heuristic.
//!
//! Builds routes greedily: starting from the depot, always visit the nearest
//! unvisited customer that still fits. When nothing fits, close the route
//! and open a new vehicle.
//!
//! # Complexity
//!
//! O(n²) where n = number of customers.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for VRP. While solution
//! quality is typically 15-25% above optimal, it provides a fast baseline.

use crate::models::{Route, RoutingProblem, Solution, Vehicle};

/// Constructs a solution with the nearest-neighbor heuristic.
///
/// The fleet is unbounded and homogeneous; every customer ends up served
/// because problem validation guarantees each demand fits one vehicle.
///
/// # Examples
///
/// ```
/// use u_cvrp_ls::constructive::nearest_neighbor;
/// use u_cvrp_ls::distance::DistanceMatrix;
/// use u_cvrp_ls::models::{CvrpProblem, Node};
///
/// let costs = DistanceMatrix::from_coordinates(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
/// let customers = vec![Node::customer(1, 10), Node::customer(2, 10), Node::customer(3, 10)];
/// let problem = CvrpProblem::new(Node::depot(0), customers, 30, costs).unwrap();
///
/// let solution = nearest_neighbor(&problem);
/// assert_eq!(solution.num_vehicles(), 1);
/// assert_eq!(solution.num_customers(), 3);
/// ```
pub fn nearest_neighbor<P: RoutingProblem + ?Sized>(problem: &P) -> Solution {
    let depot = problem.depot();
    let capacity = problem.vehicle_capacity();
    let costs = problem.costs();
    let customers = problem.customers();

    let mut visited = vec![false; customers.len()];
    let mut solution = Solution::new();

    while visited.iter().any(|&v| !v) {
        let mut current = depot;
        let mut route = vec![depot];
        let mut load = 0;

        loop {
            // nearest unvisited customer that fits capacity
            let mut best: Option<(usize, f64)> = None;
            for (k, c) in customers.iter().enumerate() {
                if visited[k] || load + c.demand() > capacity {
                    continue;
                }
                let d = costs.cost(current.id(), c.id());
                if best.is_none_or(|(_, bd)| d < bd) {
                    best = Some((k, d));
                }
            }

            match best {
                Some((k, _)) => {
                    visited[k] = true;
                    current = customers[k];
                    load += current.demand();
                    route.push(current);
                }
                None => break,
            }
        }

        if route.len() == 1 {
            // nothing fits an empty vehicle
            break;
        }
        route.push(depot);
        solution.add_vehicle(Vehicle::new(capacity, Route::new(route)));
    }

    solution
}
