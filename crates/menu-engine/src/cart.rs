//! Cart of orders
//!
//! Orders are kept in insertion order and removed by identity.

use crate::order::{Order, OrderId};

/// Ordered collection of orders
#[derive(Debug, Clone, Default)]
pub struct Cart {
    orders: Vec<Order>,
}

impl Cart {
    /// Create empty cart
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an order and return its ID
    pub fn push(&mut self, order: Order) -> OrderId {
        let id = order.id();
        self.orders.push(order);
        id
    }

    /// Order by identity
    #[must_use]
    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id() == id)
    }

    /// Mutable order by identity
    #[must_use]
    pub fn get_mut(&mut self, id: OrderId) -> Option<&mut Order> {
        self.orders.iter_mut().find(|o| o.id() == id)
    }

    /// Order at a 1-based position; valid positions are `1..=len`
    #[must_use]
    pub fn at_position(&self, position: usize) -> Option<&Order> {
        position.checked_sub(1).and_then(|idx| self.orders.get(idx))
    }

    /// Remove by identity; an order with equal contents is left alone
    pub fn remove(&mut self, id: OrderId) -> Option<Order> {
        let pos = self.orders.iter().position(|o| o.id() == id)?;
        Some(self.orders.remove(pos))
    }

    /// Orders in insertion order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// Number of orders
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// No orders
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
