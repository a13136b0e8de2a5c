//! Customer session
//!
//! A [`Session`] pairs a shared [`Menu`] with one customer's cart and the
//! order currently being edited. Mutations go to the active order.

use crate::cart::Cart;
use crate::error::SessionError;
use crate::menu::Menu;
use crate::mutator::Mutation;
use crate::order::{Order, OrderId};
use menu_catalog::NodeId;
use std::sync::Arc;

/// Cart plus active order over a shared menu
#[derive(Debug, Clone)]
pub struct Session {
    menu: Arc<Menu>,
    cart: Cart,
    active: Option<OrderId>,
}

impl Session {
    /// Create empty session
    #[must_use]
    pub fn new(menu: Arc<Menu>) -> Self {
        Self {
            menu,
            cart: Cart::new(),
            active: None,
        }
    }

    /// Shared menu
    #[inline]
    #[must_use]
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Every order in this session
    #[inline]
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Order being edited
    #[must_use]
    pub fn active_order(&self) -> Option<&Order> {
        self.active.and_then(|id| self.cart.get(id))
    }

    /// Start a new order from a product, add it to the cart and make it active
    ///
    /// # Errors
    /// Returns [`SessionError::UnknownProduct`] if `root` is not a product
    pub fn start_order(&mut self, root: NodeId) -> Result<OrderId, SessionError> {
        let order = self
            .menu
            .start_order(root)
            .ok_or(SessionError::UnknownProduct(root))?;
        let id = self.cart.push(order);
        self.active = Some(id);
        tracing::info!("Started order {} from product {}", id, root);
        Ok(id)
    }

    /// Make the order at a 1-based cart position active
    ///
    /// # Errors
    /// Returns [`SessionError::InvalidOrderPosition`] outside `1..=cart.len()`
    pub fn switch_active(&mut self, position: usize) -> Result<OrderId, SessionError> {
        let order = self
            .cart
            .at_position(position)
            .ok_or(SessionError::InvalidOrderPosition {
                position,
                len: self.cart.len(),
            })?;
        let id = order.id();
        self.active = Some(id);
        tracing::info!("Switched to order {} at position {}", id, position);
        Ok(id)
    }

    /// Drop the active order from the cart; nothing is active afterwards
    ///
    /// # Errors
    /// Returns error if no order is active
    pub fn remove_active_order(&mut self) -> Result<Order, SessionError> {
        let id = self.active.take().ok_or(SessionError::NoActiveOrder)?;
        let order = self.cart.remove(id).ok_or(SessionError::OrderNotFound(id))?;
        tracing::info!("Removed order {}", id);
        Ok(order)
    }

    /// Add to the active order
    ///
    /// # Errors
    /// Returns [`SessionError::NoActiveOrder`] if no order is active
    pub fn add(&mut self, id: NodeId) -> Result<Mutation, SessionError> {
        let menu = Arc::clone(&self.menu);
        Ok(menu.add_to_order(id, self.active_mut()?))
    }

    /// Remove from the active order
    ///
    /// # Errors
    /// Returns [`SessionError::NoActiveOrder`] if no order is active
    pub fn remove(&mut self, id: NodeId) -> Result<Mutation, SessionError> {
        let menu = Arc::clone(&self.menu);
        Ok(menu.remove_from_order(id, self.active_mut()?))
    }

    /// Add several IDs to the active order in turn
    ///
    /// # Errors
    /// Returns [`SessionError::NoActiveOrder`] if no order is active
    pub fn add_multiple(&mut self, ids: &[NodeId]) -> Result<Vec<Mutation>, SessionError> {
        let menu = Arc::clone(&self.menu);
        Ok(menu.add_multiple_to_order(ids, self.active_mut()?))
    }

    /// Remove several IDs from the active order in turn
    ///
    /// # Errors
    /// Returns [`SessionError::NoActiveOrder`] if no order is active
    pub fn remove_multiple(&mut self, ids: &[NodeId]) -> Result<Vec<Mutation>, SessionError> {
        let menu = Arc::clone(&self.menu);
        Ok(menu.remove_multiple_from_order(ids, self.active_mut()?))
    }

    /// Active order's price
    ///
    /// # Errors
    /// Returns [`SessionError::NoActiveOrder`] if no order is active
    pub fn order_price(&self) -> Result<i64, SessionError> {
        Ok(self.menu.order_price(self.active()?))
    }

    /// Sum over the cart
    #[must_use]
    pub fn cart_total_price(&self) -> i64 {
        self.menu.cart_total_price(&self.cart)
    }

    /// Active order's selections; `"No order, start one"` when nothing is active
    #[must_use]
    pub fn print_order(&self) -> String {
        match self.active_order() {
            Some(order) => self.menu.print_order(order),
            None => self.menu.print_order(&Order::empty()),
        }
    }

    /// Active order's options; `"No order, start one"` when nothing is active
    #[must_use]
    pub fn print_order_options(&self) -> String {
        match self.active_order() {
            Some(order) => self.menu.print_order_options(order),
            None => self.menu.print_order_options(&Order::empty()),
        }
    }

    /// Whole cart
    #[must_use]
    pub fn print_cart(&self) -> String {
        self.menu.print_cart(&self.cart)
    }

    /// Allergen report for the entry best matching the active order's product title
    ///
    /// `None` when the product has no title, no allergen data is loaded or
    /// nothing matches.
    ///
    /// # Errors
    /// Returns [`SessionError::NoActiveOrder`] if no order is active
    pub fn order_allergens(&self) -> Result<Option<String>, SessionError> {
        let order = self.active()?;
        Ok(self
            .menu
            .order_title(order)
            .and_then(|title| self.menu.search_allergens(title)))
    }

    fn active(&self) -> Result<&Order, SessionError> {
        let id = self.active.ok_or(SessionError::NoActiveOrder)?;
        self.cart.get(id).ok_or(SessionError::OrderNotFound(id))
    }

    fn active_mut(&mut self) -> Result<&mut Order, SessionError> {
        let id = self.active.ok_or(SessionError::NoActiveOrder)?;
        self.cart.get_mut(id).ok_or(SessionError::OrderNotFound(id))
    }
}
