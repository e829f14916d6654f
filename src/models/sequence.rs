//! Ordered node storage with constant-time membership.

use fxhash::FxHashMap;

use super::Node;

/// Positional node sequence paired with an occurrence count per identifier.
///
/// Every mutation goes through this type, so the order and the membership
/// view are updated together. Counts are kept per identifier because the
/// depot legitimately occurs twice.
#[derive(Debug, Clone, Default)]
pub(crate) struct NodeSequence {
    order: Vec<Node>,
    counts: FxHashMap<usize, usize>,
}

impl NodeSequence {
    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&Node> {
        self.order.get(index)
    }

    pub(crate) fn as_slice(&self) -> &[Node] {
        &self.order
    }

    pub(crate) fn contains(&self, id: usize) -> bool {
        self.counts.contains_key(&id)
    }

    /// Number of distinct identifiers in the sequence.
    pub(crate) fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Inserts `nodes` as a block starting at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub(crate) fn insert_all(&mut self, index: usize, nodes: &[Node]) {
        self.order.splice(index..index, nodes.iter().copied());
        for node in nodes {
            *self.counts.entry(node.id()).or_insert(0) += 1;
        }
    }

    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub(crate) fn remove(&mut self, index: usize) -> Node {
        let node = self.order.remove(index);
        if let Some(count) = self.counts.get_mut(&node.id()) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&node.id());
            }
        }
        node
    }

    /// Reverses positions `a..=b` in place.
    pub(crate) fn reverse(&mut self, a: usize, b: usize) {
        self.order[a..=b].reverse();
    }

    /// Moves the node at `from` so that it ends up at index `to`.
    pub(crate) fn move_node(&mut self, from: usize, to: usize) {
        let node = self.order.remove(from);
        self.order.insert(to, node);
    }
}
