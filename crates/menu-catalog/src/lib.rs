//! Menu Catalog
//!
//! Immutable-after-load product catalog for configurable menus.
//!
//! # Overview
//!
//! - **Node**: a configuration element with children grouped by [`Role`]
//! - **Reference**: per-ID metadata (title, price, tags, selection limits)
//! - **Catalog**: products plus references, with exact-ID lookups
//! - **AncestryIndex**: child-to-parents map over the whole catalog
//! - **AllergenTable**: name-keyed allergen and ingredient data, loaded separately
//!
//! # Example
//!
//! ```rust
//! use menu_catalog::{Catalog, NodeId};
//!
//! let catalog = Catalog::from_json_str(r#"{
//!     "Refs": { "1": { "Title": "Burger", "Price": 500 } },
//!     "Products": [ { "Id": 1 } ]
//! }"#).unwrap();
//!
//! assert_eq!(catalog.title(NodeId(1)), Some("Burger"));
//! assert!(catalog.ancestry().parents_of(NodeId(1)).is_empty());
//! ```

#![warn(missing_docs)]

pub mod allergens;
pub mod ancestry;
pub mod error;
mod loader;
pub mod node;
pub mod reference;
pub mod store;

// Re-exports
pub use allergens::{AllergenFlags, AllergenProduct, AllergenTable, SubItem};
pub use ancestry::AncestryIndex;
pub use error::{AllergenLoadError, CatalogLoadError};
pub use node::{Node, NodeId, Role};
pub use reference::{
    Reference, Requirement, SelectionLimits, SelectionMode, SelectionPolicy, MANDATORY_TAG,
    MULTISELECT_TAG,
};
pub use store::Catalog;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
