//! Explorer configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Engine policy and rendering settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Cap on repeated selections of one item
    pub max_item_quantity: u32,
    /// Indentation unit for rendered trees
    pub indent: String,
    /// Results returned by a catalog-wide search
    pub search_limit: usize,
}

impl ExplorerConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With per-item quantity cap
    #[inline]
    #[must_use]
    pub fn with_max_item_quantity(mut self, max: u32) -> Self {
        self.max_item_quantity = max;
        self
    }

    /// With indentation unit
    #[inline]
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// With search result limit
    #[inline]
    #[must_use]
    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit;
        self
    }

    /// Parse from TOML; missing keys take defaults
    ///
    /// # Errors
    /// Returns error on malformed TOML or out-of-range values
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML config file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is invalid
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] for a zero quantity cap or search limit
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_item_quantity == 0 {
            return Err(ConfigError::Invalid("max_item_quantity must be at least 1".into()));
        }
        if self.search_limit == 0 {
            return Err(ConfigError::Invalid("search_limit must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            max_item_quantity: 9,
            indent: "  ".to_string(),
            search_limit: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = ExplorerConfig::from_toml_str("max_item_quantity = 3").unwrap();
        assert_eq!(config.max_item_quantity, 3);
        assert_eq!(config.indent, "  ");
        assert_eq!(config.search_limit, 10);
    }

    #[test]
    fn rejects_zero_cap() {
        let err = ExplorerConfig::from_toml_str("max_item_quantity = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_wrong_type() {
        let err = ExplorerConfig::from_toml_str("indent = 4").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn reads_toml_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "indent = \"    \"\nsearch_limit = 3").unwrap();

        let config = ExplorerConfig::from_path(file.path()).unwrap();
        assert_eq!(config.indent, "    ");
        assert_eq!(config.search_limit, 3);
        assert_eq!(config.max_item_quantity, 9);

        let err = ExplorerConfig::from_path("/no/such/explorer.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn builder_overrides() {
        let config = ExplorerConfig::new().with_max_item_quantity(2).with_indent("\t");
        assert_eq!(config.max_item_quantity, 2);
        assert_eq!(config.indent, "\t");
    }
}
