//! Catalog nodes
//!
//! A [`Node`] is one element of a product's configuration structure. Children
//! are grouped by [`Role`]; the same [`NodeId`] may appear under several
//! parents, so the structure is a DAG keyed by ID even though each product is
//! stored as an owned tree.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer identifier shared by a node and its reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub i64);

impl NodeId {
    /// Raw integer value
    #[inline]
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for NodeId {
    #[inline]
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Child grouping under a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Bundled items (a meal's burger, side, drink)
    Items,
    /// Alternatives constrained by the owner's selection policy
    Choices,
    /// Sub-configurations that are always entered
    Configurables,
}

impl Role {
    /// Order used by every structural walk and by the default cascade
    pub const TRAVERSAL: [Role; 3] = [Role::Items, Role::Choices, Role::Configurables];

    /// Order used when rendering a product tree
    pub const RENDER: [Role; 3] = [Role::Configurables, Role::Items, Role::Choices];
}

/// Configuration node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Node {
    /// Node identifier
    pub id: NodeId,

    /// Marked as a default selection
    #[serde(default)]
    pub is_default: bool,

    /// Marked as checked; defaults only apply when also checked
    #[serde(default, rename = "Checked")]
    pub is_checked: bool,

    /// Bundled children
    #[serde(default)]
    pub items: Vec<Node>,

    /// Alternative children
    #[serde(default)]
    pub choices: Vec<Node>,

    /// Always-entered children
    #[serde(default)]
    pub configurables: Vec<Node>,
}

impl Node {
    /// Create a childless node
    #[inline]
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self {
            id: NodeId(id),
            is_default: false,
            is_checked: false,
            items: Vec::new(),
            choices: Vec::new(),
            configurables: Vec::new(),
        }
    }

    /// Mark as default and checked
    #[inline]
    #[must_use]
    pub fn preselected(mut self) -> Self {
        self.is_default = true;
        self.is_checked = true;
        self
    }

    /// Append a child under `role`
    #[must_use]
    pub fn with_child(mut self, role: Role, child: Node) -> Self {
        self.children_mut(role).push(child);
        self
    }

    /// Children for a role, in catalog order
    #[inline]
    #[must_use]
    pub fn children(&self, role: Role) -> &[Node] {
        match role {
            Role::Items => &self.items,
            Role::Choices => &self.choices,
            Role::Configurables => &self.configurables,
        }
    }

    fn children_mut(&mut self, role: Role) -> &mut Vec<Node> {
        match role {
            Role::Items => &mut self.items,
            Role::Choices => &mut self.choices,
            Role::Configurables => &mut self.configurables,
        }
    }

    /// Both default and checked
    #[inline]
    #[must_use]
    pub fn is_preselected(&self) -> bool {
        self.is_default && self.is_checked
    }

    /// No children under any role
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.items.is_empty() && self.choices.is_empty() && self.configurables.is_empty()
    }

    /// First node with `target` in preorder (self, then roles in traversal order)
    #[must_use]
    pub fn find(&self, target: NodeId) -> Option<&Node> {
        if self.id == target {
            return Some(self);
        }
        Role::TRAVERSAL
            .iter()
            .flat_map(|role| self.children(*role))
            .find_map(|child| child.find(target))
    }
}
