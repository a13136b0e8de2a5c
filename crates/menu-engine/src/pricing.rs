//! Price totals
//!
//! Prices depend only on the multiset of selected IDs, never on their order.
//! Totals are accumulated in `i128` and clamped to the `i64` range, so a
//! total beyond it reads as `i64::MAX` (or `i64::MIN`) instead of wrapping.

use crate::cart::Cart;
use menu_catalog::{Catalog, NodeId};
use std::collections::HashMap;

/// Occurrences per distinct ID
#[must_use]
pub fn selection_counts(ids: &[NodeId]) -> HashMap<NodeId, usize> {
    let mut counts = HashMap::with_capacity(ids.len());
    for id in ids {
        *counts.entry(*id).or_insert(0) += 1;
    }
    counts
}

/// Sum of `price × count` over every priced ID; unpriced IDs add nothing
#[must_use]
pub fn order_price(catalog: &Catalog, ids: &[NodeId]) -> i64 {
    saturate(order_total(catalog, ids))
}

/// Sum of every order's price
#[must_use]
pub fn cart_total_price(catalog: &Catalog, cart: &Cart) -> i64 {
    saturate(
        cart.iter()
            .map(|o| order_total(catalog, o.ids()))
            .fold(0, i128::saturating_add),
    )
}

fn order_total(catalog: &Catalog, ids: &[NodeId]) -> i128 {
    selection_counts(ids)
        .into_iter()
        .filter_map(|(id, count)| {
            let count = i128::try_from(count).unwrap_or(i128::MAX);
            catalog.price(id).map(|p| i128::from(p).saturating_mul(count))
        })
        .fold(0, i128::saturating_add)
}

fn saturate(total: i128) -> i64 {
    i64::try_from(total).unwrap_or_else(|_| {
        if total.is_negative() {
            tracing::warn!("Price total {} below range, clamped", total);
            i64::MIN
        } else {
            tracing::warn!("Price total {} above range, clamped", total);
            i64::MAX
        }
    })
}
