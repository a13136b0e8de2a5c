//! Catalog and allergen load errors
//!
//! Every variant aborts initialization; lookups on loaded data never fail.

use crate::node::NodeId;
use std::path::PathBuf;

/// Errors while loading a catalog document
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    /// IO error reading the source
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source is not a valid catalog document
    #[error("malformed catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// Reference key is not an integer
    #[error("reference key is not an integer id: '{0}'")]
    InvalidReferenceKey(String),

    /// Reference `Id` disagrees with its key
    #[error("reference keyed '{key}' declares id {id}")]
    ReferenceIdMismatch { key: String, id: NodeId },

    /// Two products share an ID
    #[error("duplicate product id: {0}")]
    DuplicateProduct(NodeId),
}

impl CatalogLoadError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors while loading an allergen document
#[derive(Debug, thiserror::Error)]
pub enum AllergenLoadError {
    /// IO error reading the source
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source is not a valid allergen document
    #[error("malformed allergen data: {0}")]
    Json(#[from] serde_json::Error),
}
