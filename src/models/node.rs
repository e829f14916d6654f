//! Node type: the depot or a customer.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A point visited by routes: either the depot or a customer.
///
/// Nodes are immutable once built. Two nodes are equal iff their
/// identifiers are equal, regardless of demand or depot flag.
///
/// # Examples
///
/// ```
/// use u_cvrp_ls::models::Node;
///
/// let depot = Node::depot(0);
/// assert!(depot.is_depot());
/// assert_eq!(depot.demand(), 0);
///
/// let c = Node::customer(3, 12);
/// assert_eq!(c.id(), 3);
/// assert_eq!(c.demand(), 12);
/// assert_eq!(c, Node::customer(3, 0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Node {
    id: usize,
    demand: i32,
    depot: bool,
}

impl Node {
    /// Creates the depot node (demand 0).
    pub fn depot(id: usize) -> Self {
        Self {
            id,
            demand: 0,
            depot: true,
        }
    }

    /// Creates a customer node with the given demand.
    ///
    /// Routes with zero total demand count as void and get pruned, so a
    /// customer should carry a positive demand. [`CvrpProblem::new`]
    /// enforces that; nodes built by hand are only checked here in debug
    /// builds, and only against negative values.
    ///
    /// [`CvrpProblem::new`]: crate::models::CvrpProblem::new
    pub fn customer(id: usize, demand: i32) -> Self {
        debug_assert!(demand >= 0, "customer {id} has negative demand {demand}");
        Self {
            id,
            demand,
            depot: false,
        }
    }

    /// Node identifier, also its index into the cost matrix.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Quantity delivered at this node.
    pub fn demand(&self) -> i32 {
        self.demand
    }

    /// Returns `true` for the depot.
    pub fn is_depot(&self) -> bool {
        self.depot
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_node_depot() {
        let d = Node::depot(0);
        assert_eq!(d.id(), 0);
        assert_eq!(d.demand(), 0);
        assert!(d.is_depot());
    }

    #[test]
    fn test_node_customer() {
        let c = Node::customer(7, 25);
        assert_eq!(c.id(), 7);
        assert_eq!(c.demand(), 25);
        assert!(!c.is_depot());
        assert_eq!(c.to_string(), "7");
    }

    #[test]
    fn test_equality_by_id() {
        assert_eq!(Node::customer(1, 5), Node::customer(1, 9));
        assert_ne!(Node::customer(1, 5), Node::customer(2, 5));

        let set: HashSet<Node> = [Node::customer(1, 5), Node::customer(1, 9)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "negative demand")]
    fn test_customer_rejects_negative_demand() {
        Node::customer(4, -3);
    }
}
