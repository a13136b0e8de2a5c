//! Text views of orders and carts
//!
//! Each line has the form `-- <title> (id <id>)<suffix>`, indented one unit
//! per depth. Children are visited in [`Role::RENDER`] order.

use crate::cart::Cart;
use crate::config::ExplorerConfig;
use crate::pricing::{cart_total_price, order_price, selection_counts};
use menu_catalog::{Catalog, Node, NodeId, Role};
use std::collections::HashMap;
use std::fmt::Write;

/// Title shown for an ID without a titled reference
pub const UNKNOWN_TITLE: &str = "Unknown";

/// Suffix for a selection count: empty, `" *selected*"` or `" *selected Nx*"`
#[must_use]
pub fn selection_suffix(count: usize) -> String {
    match count {
        0 => String::new(),
        1 => " *selected*".to_string(),
        n => format!(" *selected {n}x*"),
    }
}

/// Renders orders against one catalog
#[derive(Debug, Clone, Copy)]
pub struct OrderRenderer<'a> {
    catalog: &'a Catalog,
    config: &'a ExplorerConfig,
}

impl<'a> OrderRenderer<'a> {
    /// Create renderer
    #[inline]
    #[must_use]
    pub fn new(catalog: &'a Catalog, config: &'a ExplorerConfig) -> Self {
        Self { catalog, config }
    }

    /// Selected nodes only, followed by `Order Price: <n>`
    #[must_use]
    pub fn render_order(&self, ids: &[NodeId]) -> String {
        let Some(&root) = ids.first() else {
            return "No order, start one".to_string();
        };
        let Some(product) = self.catalog.product(root) else {
            return format!("Product not found: {root}");
        };

        let counts = selection_counts(ids);
        let mut out = String::new();
        self.line(&mut out, 0, root, &counts);
        self.walk(&mut out, product, &counts, 1, true);
        let _ = write!(out, "Order Price: {}", order_price(self.catalog, ids));
        out
    }

    /// Every node under the root, with selected ones marked
    #[must_use]
    pub fn render_options(&self, ids: &[NodeId]) -> String {
        let Some(&root) = ids.first() else {
            return "No order, start one".to_string();
        };
        let Some(product) = self.catalog.product(root) else {
            return format!("Product not found: {root}");
        };

        let counts = selection_counts(ids);
        let mut out = String::new();
        self.line(&mut out, 0, root, &counts);
        self.walk(&mut out, product, &counts, 1, false);
        out
    }

    /// Each order numbered from 1, then `Cart Total Price: <n>`
    #[must_use]
    pub fn render_cart(&self, cart: &Cart) -> String {
        if cart.is_empty() {
            return "Cart is empty.".to_string();
        }

        let mut out = String::new();
        for (i, order) in cart.iter().enumerate() {
            let _ = write!(out, "Order {}:\n{}\n\n", i + 1, self.render_order(order.ids()));
        }
        let _ = writeln!(out, "Cart Total Price: {}", cart_total_price(self.catalog, cart));
        out
    }

    fn walk(
        &self,
        out: &mut String,
        node: &Node,
        counts: &HashMap<NodeId, usize>,
        depth: usize,
        selected_only: bool,
    ) {
        for role in Role::RENDER {
            for child in node.children(role) {
                if selected_only && !counts.contains_key(&child.id) {
                    continue;
                }
                self.line(out, depth, child.id, counts);
                self.walk(out, child, counts, depth + 1, selected_only);
            }
        }
    }

    fn line(&self, out: &mut String, depth: usize, id: NodeId, counts: &HashMap<NodeId, usize>) {
        let title = self.catalog.title(id).unwrap_or(UNKNOWN_TITLE);
        let suffix = selection_suffix(counts.get(&id).copied().unwrap_or(0));
        let _ = writeln!(out, "{}-- {title} (id {id}){suffix}", self.config.indent.repeat(depth));
    }
}
