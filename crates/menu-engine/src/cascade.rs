//! Default cascade
//!
//! Walks a subtree and selects what the catalog marks as default:
//! - `Items`: every child that is default and checked
//! - `Choices`: defaults (only the first one for single-select); a mandatory
//!   single-select with no default falls back to its first choice; a group
//!   where nothing was applied is entered choice by choice
//! - `Configurables`: always entered

use crate::order::Order;
use menu_catalog::{Catalog, Node, NodeId};
use std::collections::HashSet;

/// Applies default selections beneath a node
#[derive(Debug, Clone, Copy)]
pub struct DefaultCascader<'a> {
    catalog: &'a Catalog,
}

impl<'a> DefaultCascader<'a> {
    /// Create cascader over a catalog
    #[inline]
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Ensure `node` is selected, then cascade defaults into its subtree
    ///
    /// Never duplicates an entry already present in the order.
    pub fn apply(&self, node: &Node, order: &mut Order) {
        let mut visited = HashSet::new();
        self.cascade(node, order, &mut visited);
    }

    fn cascade(&self, node: &Node, order: &mut Order, visited: &mut HashSet<NodeId>) {
        if !order.contains(node.id) {
            order.push(node.id);
        }
        // an id expanded once in this cascade is not expanded again
        if !visited.insert(node.id) {
            return;
        }

        for item in node.items.iter().filter(|i| i.is_preselected()) {
            self.cascade(item, order, visited);
        }

        if !node.choices.is_empty() {
            self.cascade_choices(node, order, visited);
        }

        for configurable in &node.configurables {
            self.cascade(configurable, order, visited);
        }
    }

    fn cascade_choices(&self, node: &Node, order: &mut Order, visited: &mut HashSet<NodeId>) {
        let policy = self
            .catalog
            .reference_for(node)
            .map(|r| r.policy)
            .unwrap_or_default();

        let mut applied = false;
        for choice in node.choices.iter().filter(|c| c.is_preselected()) {
            self.cascade(choice, order, visited);
            applied = true;
            if !policy.is_multiselect() {
                break;
            }
        }
        if applied {
            return;
        }

        if policy.is_mandatory() && !policy.is_multiselect() {
            tracing::debug!("No default under mandatory {}, selecting first choice", node.id);
            self.cascade(&node.choices[0], order, visited);
            return;
        }

        for choice in &node.choices {
            if !order.contains(choice.id) {
                self.cascade(choice, order, visited);
            }
        }
    }
}
