//! Order mutation
//!
//! Add and remove are state transitions over an [`Order`]. Neither fails: an
//! operation that has no effect reports why through [`Mutation::Unchanged`]
//! and leaves the order exactly as it was.

use crate::cascade::DefaultCascader;
use crate::config::ExplorerConfig;
use crate::order::Order;
use crate::resolver::SelectionResolver;
use menu_catalog::{Catalog, NodeId, SelectionPolicy};
use std::fmt;

/// Outcome of a single add or remove
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Mutation {
    /// The order changed
    Applied,
    /// The order is untouched
    Unchanged(NoChange),
}

impl Mutation {
    /// Order changed
    #[inline]
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Reason a mutation left the order untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoChange {
    /// Order has no root
    EmptyOrder,
    /// Target is outside the root product
    Unreachable,
    /// Target is not on a selected chain
    NotSelected,
    /// Target is the root and already selected
    AlreadySelected,
    /// Re-selection under a parent that is not multiselect
    NotMultiselect,
    /// Parent's `Max` selections already reached
    SelectionLimitReached,
    /// Per-item quantity cap reached
    QuantityCapReached,
}

impl fmt::Display for NoChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::EmptyOrder => "order is empty",
            Self::Unreachable => "not reachable from the order's product",
            Self::NotSelected => "not selected",
            Self::AlreadySelected => "already selected",
            Self::NotMultiselect => "parent allows a single selection",
            Self::SelectionLimitReached => "selection limit reached",
            Self::QuantityCapReached => "quantity limit reached",
        };
        f.write_str(reason)
    }
}

/// Add/remove engine bound to a catalog and policy
#[derive(Debug, Clone, Copy)]
pub struct OrderMutator<'a> {
    catalog: &'a Catalog,
    config: &'a ExplorerConfig,
}

impl<'a> OrderMutator<'a> {
    /// Create mutator
    #[inline]
    #[must_use]
    pub fn new(catalog: &'a Catalog, config: &'a ExplorerConfig) -> Self {
        Self { catalog, config }
    }

    /// Select `id` in `order`
    ///
    /// Re-adding a selected node appends another instance when its parent is
    /// multiselect. Otherwise the branch from the deepest selected ancestor
    /// down to `id` is appended, first pruning the ancestor's previous
    /// selection unless it is a multiselect with room left, and defaults are
    /// cascaded beneath `id`.
    pub fn add(&self, id: NodeId, order: &mut Order) -> Mutation {
        let Some(root) = order.root() else {
            return self.reject("add", id, NoChange::EmptyOrder);
        };

        let resolver = SelectionResolver::new(self.catalog);
        let path = resolver.path_to_root(id, order.ids());
        let chain = SelectionResolver::deepest_matching_chain(&path, order.ids());
        if chain.is_empty() {
            return self.reject("add", id, NoChange::Unreachable);
        }

        if chain.len() == path.len() {
            return self.reselect(root, id, &path, order);
        }

        // chain is a non-empty proper prefix of path
        let split = chain[chain.len() - 1];
        if !self.has_room(root, split, order) {
            let pruned = self.catalog.sub_ids_under(root, split);
            order.retain(|e| *e == split || !pruned.contains(e));
        }
        order.extend(path[chain.len()..].iter().copied());

        if let Some(node) = self.catalog.find_node(root, id) {
            DefaultCascader::new(self.catalog).apply(node, order);
        }

        tracing::debug!("Added {} under {} to order {}", id, split, order.id());
        Mutation::Applied
    }

    /// Deselect `id` from `order`
    ///
    /// A repeated entry loses one instance. A single entry is removed along
    /// with every selection beneath it; a mandatory parent is then refilled
    /// from its defaults. Removing the root empties the order.
    pub fn remove(&self, id: NodeId, order: &mut Order) -> Mutation {
        let Some(root) = order.root() else {
            return self.reject("remove", id, NoChange::EmptyOrder);
        };

        let path = SelectionResolver::new(self.catalog).path_to_root(id, order.ids());
        if path.is_empty() {
            return self.reject("remove", id, NoChange::Unreachable);
        }
        if SelectionResolver::deepest_matching_chain(&path, order.ids()).len() != path.len() {
            return self.reject("remove", id, NoChange::NotSelected);
        }

        if id != root && order.count(id) > 1 {
            order.remove_first(id);
            tracing::debug!("Decremented {} in order {}", id, order.id());
            return Mutation::Applied;
        }

        let parent = path.len().checked_sub(2).and_then(|i| path.get(i)).copied();

        let subtree = self.catalog.sub_ids_under(root, id);
        if subtree.len() <= 1 {
            order.remove_first(id);
        } else {
            order.retain(|e| !subtree.contains(e));
        }

        if let Some(parent) = parent.filter(|p| self.policy(*p).is_mandatory()) {
            if let Some(node) = self.catalog.find_node(root, parent) {
                tracing::debug!("Refilling mandatory {} in order {}", parent, order.id());
                DefaultCascader::new(self.catalog).apply(node, order);
            }
        }

        tracing::debug!("Removed {} from order {}", id, order.id());
        Mutation::Applied
    }

    /// Add each ID in turn; earlier effects persist when a later one is rejected
    pub fn add_multiple(&self, ids: &[NodeId], order: &mut Order) -> Vec<Mutation> {
        ids.iter().map(|&id| self.add(id, order)).collect()
    }

    /// Remove each ID in turn; earlier effects persist when a later one is rejected
    pub fn remove_multiple(&self, ids: &[NodeId], order: &mut Order) -> Vec<Mutation> {
        ids.iter().map(|&id| self.remove(id, order)).collect()
    }

    fn reselect(&self, root: NodeId, id: NodeId, path: &[NodeId], order: &mut Order) -> Mutation {
        let Some(&parent) = path.len().checked_sub(2).and_then(|i| path.get(i)) else {
            return self.reject("add", id, NoChange::AlreadySelected);
        };
        if !self.policy(parent).is_multiselect() {
            return self.reject("add", id, NoChange::NotMultiselect);
        }
        if !self.has_room(root, parent, order) {
            return self.reject("add", id, NoChange::SelectionLimitReached);
        }
        if order.count(id) >= self.config.max_item_quantity as usize {
            return self.reject("add", id, NoChange::QuantityCapReached);
        }

        order.push(id);
        tracing::debug!("Added another {} to order {}", id, order.id());
        Mutation::Applied
    }

    /// `node` is multiselect and below its `Max`
    fn has_room(&self, root: NodeId, node: NodeId, order: &Order) -> bool {
        let Some(reference) = self.catalog.reference(node) else {
            return false;
        };
        if !reference.policy.is_multiselect() {
            return false;
        }
        match reference.max_selections() {
            None => true,
            Some(max) => self.selected_under(root, node, order) < max as usize,
        }
    }

    /// Order entries strictly beneath `node`, counting repeats
    fn selected_under(&self, root: NodeId, node: NodeId, order: &Order) -> usize {
        let subtree = self.catalog.sub_ids_under(root, node);
        order
            .ids()
            .iter()
            .filter(|e| **e != node && subtree.contains(e))
            .count()
    }

    fn policy(&self, id: NodeId) -> SelectionPolicy {
        self.catalog
            .reference(id)
            .map(|r| r.policy)
            .unwrap_or_default()
    }

    fn reject(&self, op: &str, id: NodeId, reason: NoChange) -> Mutation {
        tracing::debug!("Rejected {} {}: {}", op, id, reason);
        Mutation::Unchanged(reason)
    }
}
