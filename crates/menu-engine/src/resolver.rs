//! Selection resolver
//!
//! Locates a catalog node relative to an existing order: the upward path from
//! the node to the order's root, and how much of that path is already selected.

use menu_catalog::{Catalog, NodeId};
use std::collections::{HashMap, HashSet, VecDeque};

/// Path and chain queries against one catalog
#[derive(Debug, Clone, Copy)]
pub struct SelectionResolver<'a> {
    catalog: &'a Catalog,
}

impl<'a> SelectionResolver<'a> {
    /// Create resolver over a catalog
    #[inline]
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Path from the order's root to `target`, root first and target last
    ///
    /// Walks upward through the ancestry index, restricted to IDs inside the
    /// root product. When a node has several parents, parents already in the
    /// order are tried first (earliest position first), then the rest in index
    /// order. Empty when the order is empty or `target` cannot reach the root.
    #[must_use]
    pub fn path_to_root(&self, target: NodeId, order: &[NodeId]) -> Vec<NodeId> {
        let Some(&root) = order.first() else {
            return Vec::new();
        };

        let mut walk = UpwardWalk {
            catalog: self.catalog,
            root,
            valid: self.catalog.all_sub_ids(root),
            first_seen: first_positions(order),
            visited: HashSet::new(),
            path: VecDeque::new(),
        };

        if walk.step(target) {
            walk.path.into()
        } else {
            Vec::new()
        }
    }

    /// Longest root-side prefix of `path` whose every element is in `order`
    #[must_use]
    pub fn deepest_matching_chain(path: &[NodeId], order: &[NodeId]) -> Vec<NodeId> {
        let selected: HashSet<NodeId> = order.iter().copied().collect();
        path.iter()
            .take_while(|id| selected.contains(id))
            .copied()
            .collect()
    }
}

struct UpwardWalk<'a> {
    catalog: &'a Catalog,
    root: NodeId,
    valid: HashSet<NodeId>,
    first_seen: HashMap<NodeId, usize>,
    visited: HashSet<NodeId>,
    path: VecDeque<NodeId>,
}

impl UpwardWalk<'_> {
    fn step(&mut self, current: NodeId) -> bool {
        if !self.valid.contains(&current) || !self.visited.insert(current) {
            return false;
        }

        self.path.push_front(current);
        if current == self.root {
            return true;
        }

        let mut parents = self.catalog.ancestry().parents_of(current);
        // stable: unselected parents keep index order behind selected ones
        parents.sort_by_key(|p| self.first_seen.get(p).copied().unwrap_or(usize::MAX));

        for parent in parents {
            if self.step(parent) {
                return true;
            }
        }

        self.path.pop_front();
        false
    }
}

fn first_positions(order: &[NodeId]) -> HashMap<NodeId, usize> {
    let mut positions = HashMap::with_capacity(order.len());
    for (pos, id) in order.iter().enumerate() {
        positions.entry(*id).or_insert(pos);
    }
    positions
}
