//! JSON catalog loader
//!
//! Uses serde_json to read the `{ "Refs": {...}, "Products": [...] }` document
//! into typed nodes and references.

use crate::error::CatalogLoadError;
use crate::node::{Node, NodeId};
use crate::reference::{Reference, SelectionLimits, SelectionPolicy};
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Top-level catalog document
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct CatalogDocument {
    pub(crate) refs: BTreeMap<String, RawReference>,
    pub(crate) products: Vec<Node>,
}

/// Reference as authored
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RawReference {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    price: Option<i64>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    selections: Option<SelectionLimits>,
}

impl CatalogDocument {
    pub(crate) fn from_value(value: Value) -> Result<Self, CatalogLoadError> {
        Ok(serde_json::from_value(value)?)
    }

    pub(crate) fn parse(content: &str) -> Result<Self, CatalogLoadError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Convert raw references, checking keys against declared IDs
    pub(crate) fn references(
        refs: BTreeMap<String, RawReference>,
    ) -> Result<Vec<Reference>, CatalogLoadError> {
        refs.into_iter()
            .map(|(key, raw)| raw.into_reference(key))
            .collect()
    }
}

impl RawReference {
    fn into_reference(self, key: String) -> Result<Reference, CatalogLoadError> {
        let keyed: i64 = key
            .trim()
            .parse()
            .map_err(|_| CatalogLoadError::InvalidReferenceKey(key.clone()))?;

        if let Some(declared) = self.id {
            if declared != keyed {
                return Err(CatalogLoadError::ReferenceIdMismatch {
                    key,
                    id: NodeId(declared),
                });
            }
        }

        let tags = self.tags.unwrap_or_default().into_iter().collect::<BTreeSet<_>>();
        let policy = SelectionPolicy::from_tags(tags.iter().map(String::as_str));

        Ok(Reference {
            id: NodeId(keyed),
            title: self.title,
            price: self.price,
            description: self.description,
            tags,
            limits: self.selections,
            policy,
        })
    }
}
