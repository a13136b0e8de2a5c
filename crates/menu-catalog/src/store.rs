//! Catalog store
//!
//! Immutable after construction. Lookups are exact-ID and return `None` for
//! absent IDs; only construction can fail.

use crate::ancestry::AncestryIndex;
use crate::error::CatalogLoadError;
use crate::loader::CatalogDocument;
use crate::node::{Node, NodeId, Role};
use crate::reference::Reference;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

/// Products, references and the derived ancestry index
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Node>,
    product_positions: HashMap<NodeId, usize>,
    refs: BTreeMap<NodeId, Reference>,
    ancestry: AncestryIndex,
}

impl Catalog {
    /// Build from products and references
    ///
    /// # Errors
    /// Returns [`CatalogLoadError::DuplicateProduct`] when two products share an ID
    pub fn new(
        products: Vec<Node>,
        refs: impl IntoIterator<Item = Reference>,
    ) -> Result<Self, CatalogLoadError> {
        let mut product_positions = HashMap::with_capacity(products.len());
        for (pos, product) in products.iter().enumerate() {
            if product_positions.insert(product.id, pos).is_some() {
                return Err(CatalogLoadError::DuplicateProduct(product.id));
            }
        }

        let refs: BTreeMap<NodeId, Reference> = refs.into_iter().map(|r| (r.id, r)).collect();
        let ancestry = AncestryIndex::build(&products);

        tracing::info!(
            "Catalog loaded: {} products, {} references, {} distinct nodes",
            products.len(),
            refs.len(),
            ancestry.len()
        );

        Ok(Self {
            products,
            product_positions,
            refs,
            ancestry,
        })
    }

    /// Parse a catalog document from a JSON value
    ///
    /// # Errors
    /// Returns error if the document is malformed
    pub fn from_value(value: Value) -> Result<Self, CatalogLoadError> {
        Self::from_document(CatalogDocument::from_value(value)?)
    }

    /// Parse a catalog document from JSON text
    ///
    /// # Errors
    /// Returns error if the document is malformed
    pub fn from_json_str(content: &str) -> Result<Self, CatalogLoadError> {
        Self::from_document(CatalogDocument::parse(content)?)
    }

    /// Read and parse a catalog file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is malformed
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogLoadError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| CatalogLoadError::io_error(path, e))?;
        Self::from_json_str(&content)
    }

    fn from_document(doc: CatalogDocument) -> Result<Self, CatalogLoadError> {
        let refs = CatalogDocument::references(doc.refs)?;
        Self::new(doc.products, refs)
    }

    /// Top-level product by ID
    #[must_use]
    pub fn product(&self, id: NodeId) -> Option<&Node> {
        self.product_positions
            .get(&id)
            .map(|&pos| &self.products[pos])
    }

    /// Reference by ID
    #[inline]
    #[must_use]
    pub fn reference(&self, id: NodeId) -> Option<&Reference> {
        self.refs.get(&id)
    }

    /// Reference sharing the node's ID
    #[inline]
    #[must_use]
    pub fn reference_for(&self, node: &Node) -> Option<&Reference> {
        self.reference(node.id)
    }

    /// Title for an ID, if its reference has one
    #[must_use]
    pub fn title(&self, id: NodeId) -> Option<&str> {
        self.reference(id).and_then(|r| r.title.as_deref())
    }

    /// Price for an ID, if its reference has one
    #[must_use]
    pub fn price(&self, id: NodeId) -> Option<i64> {
        self.reference(id).and_then(|r| r.price)
    }

    /// Products in catalog order
    #[inline]
    pub fn products(&self) -> impl Iterator<Item = &Node> {
        self.products.iter()
    }

    /// References in ascending ID order
    #[inline]
    pub fn references(&self) -> impl Iterator<Item = &Reference> {
        self.refs.values()
    }

    /// `(id, title)` for every titled reference, for building search candidates
    pub fn titles(&self) -> impl Iterator<Item = (NodeId, &str)> {
        self.refs
            .values()
            .filter_map(|r| r.title.as_deref().map(|t| (r.id, t)))
    }

    /// Derived child-to-parents index
    #[inline]
    #[must_use]
    pub fn ancestry(&self) -> &AncestryIndex {
        &self.ancestry
    }

    /// First node with `target` inside the product `base`, in preorder
    #[must_use]
    pub fn find_node(&self, base: NodeId, target: NodeId) -> Option<&Node> {
        self.product(base)?.find(target)
    }

    /// Every ID in the product subtree rooted at `root`, including `root`
    ///
    /// Empty when `root` is not a product.
    #[must_use]
    pub fn all_sub_ids(&self, root: NodeId) -> HashSet<NodeId> {
        let mut ids = HashSet::new();
        if let Some(product) = self.product(root) {
            collect_sub_ids(product, &mut ids);
        }
        ids
    }

    /// Every ID under the first `cutoff` found inside product `base`, including `cutoff`
    ///
    /// Empty when either cannot be located.
    #[must_use]
    pub fn sub_ids_under(&self, base: NodeId, cutoff: NodeId) -> HashSet<NodeId> {
        let mut ids = HashSet::new();
        if let Some(node) = self.find_node(base, cutoff) {
            collect_sub_ids(node, &mut ids);
        }
        ids
    }
}

/// Depth-first ID collection; an ID already collected is not walked again
fn collect_sub_ids(node: &Node, ids: &mut HashSet<NodeId>) {
    if !ids.insert(node.id) {
        return;
    }
    for role in Role::TRAVERSAL {
        for child in node.children(role) {
            collect_sub_ids(child, ids);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Catalog {
        Catalog::from_value(json!({
            "Refs": {
                "1": { "Title": "Meal", "Price": 1000 },
                "2": { "Title": "Burger" },
                "3": { "Title": "Fries", "Price": 300 }
            },
            "Products": [
                { "Id": 1, "Items": [ { "Id": 2 }, { "Id": 3 } ] },
                { "Id": 2 }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn lookups_by_exact_id() {
        let c = catalog();
        assert_eq!(c.product(NodeId(1)).unwrap().items.len(), 2);
        assert!(c.product(NodeId(3)).is_none());
        assert_eq!(c.title(NodeId(2)), Some("Burger"));
        assert_eq!(c.price(NodeId(2)), None);
        assert_eq!(c.price(NodeId(3)), Some(300));
        assert!(c.reference(NodeId(42)).is_none());
    }

    #[test]
    fn sub_ids_are_product_scoped() {
        let c = catalog();
        let all = c.all_sub_ids(NodeId(1));
        assert_eq!(all, HashSet::from([NodeId(1), NodeId(2), NodeId(3)]));

        // 3 is not a product
        assert!(c.all_sub_ids(NodeId(3)).is_empty());
        assert_eq!(c.sub_ids_under(NodeId(1), NodeId(3)), HashSet::from([NodeId(3)]));
        assert!(c.sub_ids_under(NodeId(1), NodeId(99)).is_empty());
        assert!(c.sub_ids_under(NodeId(99), NodeId(1)).is_empty());
    }

    #[test]
    fn rejects_duplicate_products() {
        let err = Catalog::new(vec![Node::new(1), Node::new(1)], []).unwrap_err();
        assert!(matches!(err, CatalogLoadError::DuplicateProduct(NodeId(1))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Catalog::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CatalogLoadError::Io { .. }));
    }
}
