//! Ancestry index
//!
//! Maps every node ID to the set of IDs it appears under. Built once by a
//! full walk of every product and read-only afterwards.

use crate::node::{Node, NodeId, Role};
use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;

/// Child-to-parents index over the whole catalog
///
/// Edges point from parent to child. A node reachable from two parents has
/// two incoming edges; parents come back in the order they were first seen.
#[derive(Debug, Clone, Default)]
pub struct AncestryIndex {
    graph: DiGraphMap<NodeId, ()>,
}

impl AncestryIndex {
    /// Build from a product forest
    #[must_use]
    pub fn build<'a>(products: impl IntoIterator<Item = &'a Node>) -> Self {
        let mut graph = DiGraphMap::new();
        for product in products {
            graph.add_node(product.id);
            record_children(&mut graph, product);
        }

        if petgraph::algo::is_cyclic_directed(&graph) {
            tracing::warn!("catalog contains an id-level cycle; ancestry walks rely on visited guards");
        }

        Self { graph }
    }

    /// Parent IDs of `id`; empty for roots and unknown IDs
    #[must_use]
    pub fn parents_of(&self, id: NodeId) -> Vec<NodeId> {
        if !self.graph.contains_node(id) {
            return Vec::new();
        }
        self.graph
            .neighbors_directed(id, Direction::Incoming)
            .collect()
    }

    /// Whether `id` was seen anywhere in the catalog
    #[inline]
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.graph.contains_node(id)
    }

    /// Number of distinct IDs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// No IDs indexed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Number of distinct parent/child links
    #[inline]
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }
}

fn record_children(graph: &mut DiGraphMap<NodeId, ()>, node: &Node) {
    for role in Role::TRAVERSAL {
        for child in node.children(role) {
            graph.add_edge(node.id, child.id, ());
            record_children(graph, child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_child_has_both_parents() {
        let product = Node::new(1)
            .with_child(Role::Items, Node::new(2).with_child(Role::Choices, Node::new(9)))
            .with_child(Role::Configurables, Node::new(3).with_child(Role::Choices, Node::new(9)));
        let index = AncestryIndex::build([&product]);

        assert_eq!(index.parents_of(NodeId(9)), vec![NodeId(2), NodeId(3)]);
        assert_eq!(index.parents_of(NodeId(2)), vec![NodeId(1)]);
        assert!(index.parents_of(NodeId(1)).is_empty());
        assert!(index.parents_of(NodeId(404)).is_empty());
        assert_eq!(index.len(), 4);
        assert_eq!(index.link_count(), 4);
    }

    #[test]
    fn id_cycle_is_indexed_not_rejected() {
        // 5 -> 6 -> 5 by id; finite as a tree, cyclic as a graph
        let product = Node::new(5).with_child(
            Role::Items,
            Node::new(6).with_child(Role::Items, Node::new(5)),
        );
        let index = AncestryIndex::build([&product]);
        assert_eq!(index.parents_of(NodeId(5)), vec![NodeId(6)]);
        assert_eq!(index.parents_of(NodeId(6)), vec![NodeId(5)]);
    }
}
