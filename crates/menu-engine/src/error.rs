//! Error types for the engine
//!
//! Mutations never fail; these cover session bookkeeping and configuration.

use crate::order::OrderId;
use menu_catalog::NodeId;
use std::path::PathBuf;

/// Errors from session-level operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// No order is active
    #[error("no active order, start one")]
    NoActiveOrder,

    /// Order is not in the cart
    #[error("order not found: {0}")]
    OrderNotFound(OrderId),

    /// Position outside `1..=len`
    #[error("invalid order position {position}: cart holds {len} orders")]
    InvalidOrderPosition { position: usize, len: usize },

    /// Root is not a product
    #[error("unknown product: {0}")]
    UnknownProduct(NodeId),
}

/// Errors while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or type error
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Parsed but out of range
    #[error("invalid config: {0}")]
    Invalid(String),
}
