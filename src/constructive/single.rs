//! One vehicle per customer.

use crate::models::{Route, RoutingProblem, Solution, Vehicle};

/// Builds the trivial feasible solution `[depot, c, depot]` for every
/// customer, in problem order.
///
/// # Examples
///
/// ```
/// use u_cvrp_ls::constructive::one_route_per_customer;
/// use u_cvrp_ls::distance::DistanceMatrix;
/// use u_cvrp_ls::models::{CvrpProblem, Node};
///
/// let costs = DistanceMatrix::from_coordinates(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
/// let problem = CvrpProblem::new(
///     Node::depot(0),
///     vec![Node::customer(1, 5), Node::customer(2, 5)],
///     10,
///     costs,
/// )
/// .unwrap();
///
/// let sol = one_route_per_customer(&problem);
/// assert_eq!(sol.num_vehicles(), 2);
/// assert!(sol.is_valid());
/// ```
pub fn one_route_per_customer<P: RoutingProblem + ?Sized>(problem: &P) -> Solution {
    let depot = problem.depot();
    let capacity = problem.vehicle_capacity();
    Solution::from_vehicles(
        problem
            .customers()
            .iter()
            .map(|&c| Vehicle::new(capacity, Route::new([depot, c, depot])))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::{CvrpProblem, Node};

    #[test]
    fn test_one_route_per_customer() {
        let costs = DistanceMatrix::from_coordinates(&[(0.0, 0.0), (3.0, 4.0), (0.0, 8.0)]);
        let p = CvrpProblem::new(
            Node::depot(0),
            vec![Node::customer(1, 5), Node::customer(2, 7)],
            10,
            costs,
        )
        .expect("consistent");
        let sol = one_route_per_customer(&p);
        assert_eq!(sol.num_vehicles(), 2);
        assert_eq!(sol.vehicles()[0].route().node_ids(), vec![0, 1, 0]);
        assert_eq!(sol.vehicles()[1].load(), 7);
        assert!((sol.cost(p.costs()) - 26.0).abs() < 1e-10);
    }

    #[test]
    fn test_no_customers() {
        let p = CvrpProblem::new(Node::depot(0), vec![], 10, DistanceMatrix::new(1))
            .expect("consistent");
        assert_eq!(one_route_per_customer(&p).num_vehicles(), 0);
    }
}
