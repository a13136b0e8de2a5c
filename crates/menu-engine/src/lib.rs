//! Menu Engine
//!
//! Order mutation over a [`menu_catalog::Catalog`]: adding and removing
//! selections under single-select, multiselect and mandatory rules, cascading
//! defaults into newly entered subtrees, and deriving prices and text views.
//!
//! # Layers
//!
//! - [`resolver`]: upward paths from a node to an order's root
//! - [`cascade`]: default selection beneath a node
//! - [`mutator`]: add/remove state transitions
//! - [`pricing`] and [`render`]: derived views
//! - [`menu`]: context object owning catalog, config and search matcher
//! - [`session`]: one customer's cart and active order
//!
//! # Example
//!
//! ```rust
//! use menu_catalog::{Catalog, NodeId};
//! use menu_engine::prelude::*;
//!
//! let catalog = Catalog::from_json_str(r#"{
//!     "Refs": {
//!         "100": { "Title": "Drink", "Tags": ["configurationtype:mandatory"] },
//!         "101": { "Title": "Cola", "Price": 500 },
//!         "102": { "Title": "Lemonade", "Price": 700 }
//!     },
//!     "Products": [ { "Id": 100, "Choices": [
//!         { "Id": 101, "IsDefault": true, "Checked": true },
//!         { "Id": 102 }
//!     ] } ]
//! }"#).unwrap();
//!
//! let menu = Menu::new(catalog);
//! let mut order = menu.start_order(NodeId(100)).unwrap();
//! assert_eq!(menu.order_price(&order), 500);
//!
//! assert!(menu.add_to_order(NodeId(102), &mut order).is_applied());
//! assert_eq!(order.ids(), &[NodeId(100), NodeId(102)]);
//! assert_eq!(menu.order_price(&order), 700);
//! ```

#![warn(missing_docs)]

pub mod cart;
pub mod cascade;
pub mod config;
pub mod error;
pub mod menu;
pub mod mutator;
pub mod order;
pub mod pricing;
pub mod render;
pub mod resolver;
pub mod search;
pub mod session;

// Re-exports
pub use cart::Cart;
pub use cascade::DefaultCascader;
pub use config::ExplorerConfig;
pub use error::{ConfigError, SessionError};
pub use menu::{Menu, NO_ALLERGEN_DATA};
pub use mutator::{Mutation, NoChange, OrderMutator};
pub use order::{Order, OrderId};
pub use render::OrderRenderer;
pub use resolver::SelectionResolver;
pub use search::{Candidate, Matcher, ScoredCandidate, TokenMatcher};
pub use session::Session;

/// Commonly used types
pub mod prelude {
    pub use crate::cart::Cart;
    pub use crate::config::ExplorerConfig;
    pub use crate::error::{ConfigError, SessionError};
    pub use crate::menu::Menu;
    pub use crate::mutator::{Mutation, NoChange};
    pub use crate::order::{Order, OrderId};
    pub use crate::search::{Matcher, TokenMatcher};
    pub use crate::session::Session;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
