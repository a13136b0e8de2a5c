//! Orders
//!
//! An [`Order`] is an ordered, duplicate-permitting sequence of node IDs whose
//! first element is the product it was started from. Orders have identity:
//! two orders with equal contents are still distinct.

use menu_catalog::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Order identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
    /// Fresh random ID
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One customer's in-progress selection
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    id: OrderId,
    items: Vec<NodeId>,
}

impl Order {
    /// Order holding only its root
    #[must_use]
    pub fn new(root: NodeId) -> Self {
        Self::from_ids([root])
    }

    /// Order with no selections
    #[must_use]
    pub fn empty() -> Self {
        Self::from_ids(Vec::new())
    }

    /// Order from an ID sequence
    #[must_use]
    pub fn from_ids(ids: impl IntoIterator<Item = NodeId>) -> Self {
        Self {
            id: OrderId::new(),
            items: ids.into_iter().collect(),
        }
    }

    /// Order from plain integers, as received over a transport boundary
    #[must_use]
    pub fn from_raw(ids: impl IntoIterator<Item = i64>) -> Self {
        Self::from_ids(ids.into_iter().map(NodeId))
    }

    /// Identity
    #[inline]
    #[must_use]
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Root product, `None` when empty
    #[inline]
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.items.first().copied()
    }

    /// Selected IDs in insertion order
    #[inline]
    #[must_use]
    pub fn ids(&self) -> &[NodeId] {
        &self.items
    }

    /// Number of entries, counting duplicates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// No entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Contains at least one `id`
    #[inline]
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.items.contains(&id)
    }

    /// Occurrences of `id`
    #[must_use]
    pub fn count(&self, id: NodeId) -> usize {
        self.items.iter().filter(|&&e| e == id).count()
    }

    /// Consume into the raw ID sequence
    #[must_use]
    pub fn into_ids(self) -> Vec<NodeId> {
        self.items
    }

    pub(crate) fn push(&mut self, id: NodeId) {
        self.items.push(id);
    }

    pub(crate) fn extend(&mut self, ids: impl IntoIterator<Item = NodeId>) {
        self.items.extend(ids);
    }

    /// Remove the first occurrence of `id`
    pub(crate) fn remove_first(&mut self, id: NodeId) -> bool {
        match self.items.iter().position(|&e| e == id) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&NodeId) -> bool) {
        self.items.retain(keep);
    }
}
