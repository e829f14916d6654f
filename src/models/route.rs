//! Depot-bookended route and its mutation primitives.

use std::fmt;

use super::sequence::NodeSequence;
use super::Node;
use crate::distance::CostMatrix;
use crate::error::{Result, RoutingError};

/// An ordered sequence of nodes starting and ending at the depot.
///
/// Structural invariants are checked by [`Route::is_valid`], never enforced
/// while building: a valid route has at least three nodes, the depot at both
/// endpoints, and every interior customer exactly once.
///
/// # Examples
///
/// ```
/// use u_cvrp_ls::models::{Node, Route};
///
/// let d = Node::depot(0);
/// let mut route = Route::new([d, Node::customer(1, 4), Node::customer(2, 3), d]);
/// assert!(route.is_valid());
/// assert_eq!(route.demand(), 7);
///
/// route.reverse_segment(1, 2).unwrap();
/// assert_eq!(route.node_ids(), vec![0, 2, 1, 0]);
///
/// assert!(route.remove_at(0).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Route {
    nodes: NodeSequence,
}

impl Route {
    /// Builds a route holding `nodes` in the given order.
    pub fn new<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        let mut route = Self::default();
        route.prepend_all(nodes);
        route
    }

    /// Builds the void route `[depot, depot]`.
    pub fn void(depot: Node) -> Self {
        Self::new([depot, depot])
    }

    /// Inserts `nodes`, in order, at the front of the route.
    pub fn prepend_all<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = Node>,
    {
        let nodes: Vec<Node> = nodes.into_iter().collect();
        self.nodes.insert_all(0, &nodes);
    }

    /// Inserts `nodes`, in order, starting at position `index`.
    ///
    /// Fails if `index > len`.
    pub fn insert_at<I>(&mut self, index: usize, nodes: I) -> Result<()>
    where
        I: IntoIterator<Item = Node>,
    {
        if index > self.len() {
            return Err(RoutingError::invalid_op(format!(
                "insert index {index} out of range for route of size {}",
                self.len()
            )));
        }
        let nodes: Vec<Node> = nodes.into_iter().collect();
        self.nodes.insert_all(index, &nodes);
        Ok(())
    }

    /// Removes and returns the node at `index`.
    ///
    /// Fails when `index` addresses either endpoint or lies past the end.
    pub fn remove_at(&mut self, index: usize) -> Result<Node> {
        if index >= self.len() {
            return Err(RoutingError::invalid_op(format!(
                "remove index {index} out of range for route of size {}",
                self.len()
            )));
        }
        if index == 0 || index == self.len() - 1 {
            return Err(RoutingError::invalid_op("cannot remove depots"));
        }
        Ok(self.nodes.remove(index))
    }

    /// Returns the node at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Number of nodes, depots included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the route holds no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if a node with the same identifier is on this route.
    pub fn contains(&self, node: &Node) -> bool {
        self.nodes.contains(node.id())
    }

    /// Forward traversal in route order.
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.as_slice().iter()
    }

    /// All nodes in route order.
    pub fn nodes(&self) -> &[Node] {
        self.nodes.as_slice()
    }

    /// The interior nodes, i.e. everything between the two endpoints.
    pub fn customers(&self) -> &[Node] {
        match self.len() {
            0..=2 => &[],
            n => &self.nodes.as_slice()[1..n - 1],
        }
    }

    /// Node identifiers in route order.
    pub fn node_ids(&self) -> Vec<usize> {
        self.iter().map(Node::id).collect()
    }

    /// Total demand over all nodes. Zero identifies a void route.
    pub fn demand(&self) -> i32 {
        self.iter().map(Node::demand).sum()
    }

    /// Sum of arc costs over consecutive node pairs.
    ///
    /// No term is charged before the first node.
    pub fn cost<M: CostMatrix + ?Sized>(&self, costs: &M) -> f64 {
        self.nodes
            .as_slice()
            .windows(2)
            .map(|w| costs.cost(w[0].id(), w[1].id()))
            .sum()
    }

    /// Checks the structural invariants without mutating.
    pub fn is_valid(&self) -> bool {
        let n = self.len();
        if n < 3 {
            return false;
        }
        let first = &self.nodes.as_slice()[0];
        let last = &self.nodes.as_slice()[n - 1];
        if !first.is_depot() || !last.is_depot() {
            return false;
        }
        // depot fills both endpoints, every customer once
        n - 1 == self.nodes.distinct()
    }

    /// Reverses positions `a..=b` (the 2-opt move).
    ///
    /// Equivalent to replacing arcs `(a-1, a)` and `(b, b+1)` with
    /// `(a-1, b)` and `(a, b+1)`. Applying it twice with the same bounds
    /// restores the original order.
    ///
    /// ```text
    /// [0, 1, 2, 3, 4, 5, 0] with a=1, b=5  =>  [0, 5, 4, 3, 2, 1, 0]
    /// ```
    pub fn reverse_segment(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_valid()?;
        let n = self.len();
        if a > n {
            return Err(RoutingError::invalid_op(format!("index {a} out of range")));
        }
        if b > n {
            return Err(RoutingError::invalid_op(format!("index {b} out of range")));
        }
        if a == 0 || b >= n - 1 {
            return Err(RoutingError::invalid_op("cannot reverse depots"));
        }
        if b <= a {
            return Err(RoutingError::invalid_op(format!(
                "invalid indexes: {a} >= {b}"
            )));
        }
        self.nodes.reverse(a, b);
        Ok(())
    }

    /// Moves the node at `i` so that it directly follows the node that was
    /// at `j` before the move.
    ///
    /// The multiset of nodes is unchanged.
    pub fn relocate_node(&mut self, i: usize, j: usize) -> Result<()> {
        self.check_valid()?;
        let n = self.len();
        if i >= n {
            return Err(RoutingError::invalid_op(format!("index {i} out of range")));
        }
        // n >= 3 here, and j + 1 must address a real position
        if j >= n - 1 {
            return Err(RoutingError::invalid_op(format!("index {j} out of range")));
        }
        if i == 0 || i == n - 1 {
            return Err(RoutingError::invalid_op("cannot move depots"));
        }
        // removing before the target shifts it left by one
        let target = if i <= j { j } else { j + 1 };
        self.nodes.move_node(i, target);
        Ok(())
    }

    fn check_valid(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(RoutingError::invalid_op(format!(
                "check route validity: {self}"
            )))
        }
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (k, node) in self.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{node}")?;
        }
        write!(f, "]")
    }
}
