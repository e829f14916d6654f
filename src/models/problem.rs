//! Routing problem trait and the capacitated instance type.

use fxhash::FxHashSet;

use super::Node;
use crate::distance::{CostMatrix, DistanceMatrix};
use crate::error::{Result, RoutingError};

/// Defines a capacitated vehicle routing problem instance.
///
/// This is the read-only view the optimizers and the strategy consume:
/// the depot, the customers, the homogeneous vehicle capacity, and the
/// travel cost lookup.
pub trait RoutingProblem {
    /// The depot node shared by every route.
    fn depot(&self) -> Node;

    /// All customers (depot excluded).
    fn customers(&self) -> &[Node];

    /// Capacity of every vehicle.
    fn vehicle_capacity(&self) -> i32;

    /// Travel cost lookup keyed by node identifier.
    fn costs(&self) -> &dyn CostMatrix;

    /// Looks up a node by identifier.
    fn node(&self, id: usize) -> Option<Node> {
        let depot = self.depot();
        if depot.id() == id {
            return Some(depot);
        }
        self.customers().iter().find(|c| c.id() == id).copied()
    }
}

/// A validated CVRP instance backed by a dense cost matrix.
///
/// # Examples
///
/// ```
/// use u_cvrp_ls::distance::DistanceMatrix;
/// use u_cvrp_ls::models::{CvrpProblem, Node, RoutingProblem};
///
/// let costs = DistanceMatrix::from_coordinates(&[(0.0, 0.0), (3.0, 4.0), (6.0, 8.0)]);
/// let problem = CvrpProblem::new(
///     Node::depot(0),
///     vec![Node::customer(1, 10), Node::customer(2, 20)],
///     50,
///     costs,
/// )
/// .unwrap();
///
/// assert_eq!(problem.customers().len(), 2);
/// assert!((problem.costs().cost(0, 1) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct CvrpProblem {
    depot: Node,
    customers: Vec<Node>,
    capacity: i32,
    costs: DistanceMatrix,
}

impl CvrpProblem {
    /// Creates an instance, checking it for consistency.
    ///
    /// Fails if the depot is not flagged as a depot, a customer is flagged
    /// as one, identifiers repeat, a demand is not positive or above capacity,
    /// or the matrix does not cover every identifier.
    pub fn new(
        depot: Node,
        customers: Vec<Node>,
        capacity: i32,
        costs: DistanceMatrix,
    ) -> Result<Self> {
        if !depot.is_depot() {
            return Err(RoutingError::InvalidProblem(format!(
                "node {depot} is not a depot"
            )));
        }
        if capacity <= 0 {
            return Err(RoutingError::InvalidProblem(format!(
                "vehicle capacity must be positive, got {capacity}"
            )));
        }

        let mut ids = FxHashSet::default();
        ids.insert(depot.id());
        for c in &customers {
            if c.is_depot() {
                return Err(RoutingError::InvalidProblem(format!(
                    "customer {c} is flagged as depot"
                )));
            }
            if !ids.insert(c.id()) {
                return Err(RoutingError::InvalidProblem(format!(
                    "duplicate node id {c}"
                )));
            }
            // zero demand would make a served route look void
            if c.demand() <= 0 || c.demand() > capacity {
                return Err(RoutingError::InvalidProblem(format!(
                    "demand {} of customer {c} outside [1, {capacity}]",
                    c.demand()
                )));
            }
        }

        if let Some(max_id) = ids.iter().max() {
            if *max_id >= costs.size() {
                return Err(RoutingError::InvalidProblem(format!(
                    "cost matrix of size {} does not cover node {max_id}",
                    costs.size()
                )));
            }
        }

        Ok(Self {
            depot,
            customers,
            capacity,
            costs,
        })
    }

    /// The underlying dense matrix.
    pub fn distance_matrix(&self) -> &DistanceMatrix {
        &self.costs
    }
}

impl RoutingProblem for CvrpProblem {
    fn depot(&self) -> Node {
        self.depot
    }

    fn customers(&self) -> &[Node] {
        &self.customers
    }

    fn vehicle_capacity(&self) -> i32 {
        self.capacity
    }

    fn costs(&self) -> &dyn CostMatrix {
        &self.costs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn costs(n: usize) -> DistanceMatrix {
        DistanceMatrix::new(n)
    }

    #[test]
    fn test_problem_new() {
        let p = CvrpProblem::new(
            Node::depot(0),
            vec![Node::customer(1, 5), Node::customer(2, 7)],
            10,
            costs(3),
        )
        .expect("consistent");
        assert_eq!(p.depot().id(), 0);
        assert_eq!(p.vehicle_capacity(), 10);
        assert_eq!(p.node(2).map(|n| n.demand()), Some(7));
        assert!(p.node(0).is_some_and(|n| n.is_depot()));
        assert!(p.node(9).is_none());
        assert_eq!(p.distance_matrix().size(), 3);
    }

    #[test]
    fn test_problem_rejects_bad_data() {
        let err = |r: Result<CvrpProblem>| matches!(r, Err(RoutingError::InvalidProblem(_)));

        assert!(err(CvrpProblem::new(Node::customer(0, 0), vec![], 10, costs(1))));
        assert!(err(CvrpProblem::new(Node::depot(0), vec![], 0, costs(1))));
        assert!(err(CvrpProblem::new(
            Node::depot(0),
            vec![Node::customer(1, 5), Node::customer(1, 5)],
            10,
            costs(2),
        )));
        assert!(err(CvrpProblem::new(
            Node::depot(0),
            vec![Node::customer(1, 11)],
            10,
            costs(2),
        )));
        assert!(err(CvrpProblem::new(
            Node::depot(0),
            vec![Node::customer(1, 0)],
            10,
            costs(2),
        )));
        assert!(err(CvrpProblem::new(
            Node::depot(0),
            vec![Node::customer(3, 1)],
            10,
            costs(3),
        )));
        assert!(err(CvrpProblem::new(
            Node::depot(0),
            vec![Node::depot(1)],
            10,
            costs(2),
        )));
    }
}
