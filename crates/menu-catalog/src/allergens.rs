//! Allergen and ingredient data
//!
//! Loaded from its own `{ "sub_items": {...}, "products": [...] }` document.
//! Entries are keyed by display name, not by node ID: products match
//! case-insensitively, sub-items exactly.

use crate::error::AllergenLoadError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::Path;

/// Allergen name to presence
pub type AllergenFlags = BTreeMap<String, bool>;

/// Component shared between products, e.g. a bun or a sauce
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubItem {
    /// Allergen presence
    #[serde(default)]
    pub allergens: AllergenFlags,
    /// Free-text ingredient list
    #[serde(default)]
    pub ingredients: Option<String>,
}

/// Sold product with its own allergen summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllergenProduct {
    /// Display name
    pub name: String,
    /// Allergen presence for the product as a whole
    #[serde(default)]
    pub allergens: AllergenFlags,
    /// Names of the sub-items it is built from
    #[serde(default)]
    pub sub_items: Vec<String>,
}

/// Name-keyed allergen lookup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllergenTable {
    #[serde(default)]
    sub_items: BTreeMap<String, SubItem>,
    #[serde(default)]
    products: Vec<AllergenProduct>,
}

impl AllergenTable {
    /// Parse from a JSON value
    ///
    /// # Errors
    /// Returns error if the document is malformed
    pub fn from_value(value: Value) -> Result<Self, AllergenLoadError> {
        let table: Self = serde_json::from_value(value)?;
        table.log_loaded();
        Ok(table)
    }

    /// Parse from JSON text
    ///
    /// # Errors
    /// Returns error if the document is malformed
    pub fn from_json_str(content: &str) -> Result<Self, AllergenLoadError> {
        let table: Self = serde_json::from_str(content)?;
        table.log_loaded();
        Ok(table)
    }

    /// Read and parse an allergen file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is malformed
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AllergenLoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| AllergenLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    fn log_loaded(&self) {
        tracing::info!(
            "Allergen data loaded: {} products, {} sub-items",
            self.products.len(),
            self.sub_items.len()
        );
    }

    /// Product by name, ignoring case
    #[must_use]
    pub fn product(&self, name: &str) -> Option<&AllergenProduct> {
        self.products
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Sub-item by exact name
    #[inline]
    #[must_use]
    pub fn sub_item(&self, name: &str) -> Option<&SubItem> {
        self.sub_items.get(name)
    }

    /// Allergens of a product, else of a sub-item
    #[must_use]
    pub fn allergens(&self, name: &str) -> Option<&AllergenFlags> {
        self.product(name)
            .map(|p| &p.allergens)
            .or_else(|| self.sub_item(name).map(|s| &s.allergens))
    }

    /// Ingredient list of a sub-item
    #[must_use]
    pub fn ingredients(&self, name: &str) -> Option<&str> {
        self.sub_item(name)?.ingredients.as_deref()
    }

    /// Sub-item names, then product names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sub_items
            .keys()
            .map(String::as_str)
            .chain(self.products.iter().map(|p| p.name.as_str()))
    }

    /// Names of sub-items that list ingredients
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.sub_items
            .iter()
            .filter(|(_, s)| s.ingredients.is_some())
            .map(|(name, _)| name.as_str())
    }

    /// Products in document order
    pub fn products(&self) -> impl Iterator<Item = &AllergenProduct> {
        self.products.iter()
    }

    /// Nothing loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.sub_items.is_empty()
    }

    /// Text report for a product (with its sub-items) or a single sub-item
    #[must_use]
    pub fn describe(&self, name: &str) -> String {
        let mut out = String::new();

        if let Some(product) = self.product(name) {
            let _ = writeln!(out, "Product: {}", product.name);
            out.push_str("Main Allergens:\n");
            write_flags(&mut out, &product.allergens, "  ");

            if !product.sub_items.is_empty() {
                out.push_str("\nSub-item Allergens:\n");
                for sub_name in &product.sub_items {
                    match self.sub_item(sub_name) {
                        Some(sub) => {
                            let _ = writeln!(out, "  Sub-item: {sub_name}");
                            write_flags(&mut out, &sub.allergens, "    ");
                        }
                        None => {
                            let _ = writeln!(out, "  Sub-item: {sub_name} (not found)");
                        }
                    }
                }
            }
        } else if let Some(sub) = self.sub_item(name) {
            let _ = writeln!(out, "Sub-item: {name}");
            if let Some(ingredients) = &sub.ingredients {
                let _ = writeln!(out, "Ingredients: {ingredients}");
            }
            out.push_str("Allergens:\n");
            write_flags(&mut out, &sub.allergens, "  ");
        } else {
            let _ = writeln!(out, "'{name}' not found as a product or sub-item.");
        }

        out.truncate(out.trim_end().len());
        out
    }

    /// Allergen summary of every product
    #[must_use]
    pub fn describe_all(&self) -> String {
        let mut out = String::new();
        for product in &self.products {
            let _ = writeln!(out, "Product: {}", product.name);
            out.push_str("Allergens:\n");
            write_flags(&mut out, &product.allergens, "  ");
            out.push('\n');
        }
        out.truncate(out.trim_end().len());
        out
    }
}

fn write_flags(out: &mut String, flags: &AllergenFlags, indent: &str) {
    for (allergen, present) in flags {
        let _ = writeln!(out, "{indent}{allergen}: {present}");
    }
}
