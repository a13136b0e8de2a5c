//! Reference metadata
//!
//! A [`Reference`] carries the flat metadata for one [`NodeId`]. Its selection
//! policy governs the node's *children*, not the node itself.

use crate::node::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Tag marking a node whose children may be selected together
pub const MULTISELECT_TAG: &str = "configurationtype:multiselect";

/// Tag marking a node that must always have a child selected
pub const MANDATORY_TAG: &str = "configurationtype:mandatory";

/// Selection bounds for a node's children
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SelectionLimits {
    /// Minimum selections
    #[serde(default)]
    pub min: Option<u32>,
    /// Maximum selections, `None` is unlimited
    #[serde(default)]
    pub max: Option<u32>,
}

/// How many children may be selected at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SelectionMode {
    /// Exactly one branch at a time
    #[default]
    Single,
    /// Several branches, up to the `Max` limit
    Multi,
}

/// Whether a selection must always exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Requirement {
    /// May be left empty
    #[default]
    Optional,
    /// Refilled from defaults when emptied
    Mandatory,
}

/// Selection policy derived once from tags at load time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SelectionPolicy {
    /// Single or multi select
    pub mode: SelectionMode,
    /// Optional or mandatory
    pub requirement: Requirement,
}

impl SelectionPolicy {
    /// Derive from a tag set
    #[must_use]
    pub fn from_tags<'a>(tags: impl IntoIterator<Item = &'a str>) -> Self {
        let mut policy = Self::default();
        for tag in tags {
            match tag {
                MULTISELECT_TAG => policy.mode = SelectionMode::Multi,
                MANDATORY_TAG => policy.requirement = Requirement::Mandatory,
                _ => {}
            }
        }
        policy
    }

    /// Multi select
    #[inline]
    #[must_use]
    pub fn is_multiselect(self) -> bool {
        self.mode == SelectionMode::Multi
    }

    /// Mandatory
    #[inline]
    #[must_use]
    pub fn is_mandatory(self) -> bool {
        self.requirement == Requirement::Mandatory
    }
}

/// Per-ID metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    /// Identifier shared with the node
    pub id: NodeId,
    /// Display title
    pub title: Option<String>,
    /// Price in minor currency units
    pub price: Option<i64>,
    /// Free-form description
    pub description: Option<String>,
    /// Raw tags as authored
    pub tags: BTreeSet<String>,
    /// Selection bounds for children
    pub limits: Option<SelectionLimits>,
    /// Typed view of the configuration tags
    pub policy: SelectionPolicy,
}

impl Reference {
    /// Create a reference with only an ID
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self {
            id: NodeId(id),
            title: None,
            price: None,
            description: None,
            tags: BTreeSet::new(),
            limits: None,
            policy: SelectionPolicy::default(),
        }
    }

    /// With title
    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// With price
    #[inline]
    #[must_use]
    pub fn with_price(mut self, price: i64) -> Self {
        self.price = Some(price);
        self
    }

    /// With tags; the policy is re-derived
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self.policy = SelectionPolicy::from_tags(self.tags.iter().map(String::as_str));
        self
    }

    /// With selection limits
    #[inline]
    #[must_use]
    pub fn with_limits(mut self, limits: SelectionLimits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Maximum child selections, `None` when unlimited
    #[inline]
    #[must_use]
    pub fn max_selections(&self) -> Option<u32> {
        self.limits.and_then(|l| l.max)
    }

    /// Check for an exact tag
    #[inline]
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}
