//! Config source trait and implementations
//!
//! External collaborators that produce a [`PizzaConfig`] from a source
//! identifier. The manager stays agnostic of where configurations come
//! from; swapping the JSON file source for another backend is a matter of
//! implementing [`ConfigSource`].

use crate::config::PizzaConfig;
use crate::error::Result;

/// Trait for external configuration sources
pub trait ConfigSource {
    /// Load a configuration from the given source identifier.
    ///
    /// # Errors
    ///
    /// Returns a load error if the identifier cannot be resolved, read, or
    /// parsed.
    fn load(&self, identifier: &str) -> Result<PizzaConfig>;
}

// =============================================================================
// JSON File Source Implementation
// =============================================================================

#[cfg(feature = "json")]
pub use json::JsonFileSource;

#[cfg(feature = "json")]
mod json {
    use super::ConfigSource;
    use crate::config::PizzaConfig;
    use crate::error::{Error, Result};
    use std::path::{Path, PathBuf};

    /// JSON file source (default).
    ///
    /// Treats the source identifier as the path of a JSON file holding a
    /// serialized [`PizzaConfig`]. Relative identifiers resolve against the
    /// base directory when one is set.
    #[derive(Debug, Clone, Default)]
    pub struct JsonFileSource {
        base_dir: Option<PathBuf>,
    }

    impl JsonFileSource {
        /// Create a source that resolves identifiers as given.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Set the base directory for relative identifiers.
        ///
        /// Supports `~` expansion for home directory.
        #[must_use]
        pub fn base_dir(mut self, path: impl Into<PathBuf>) -> Self {
            let path: PathBuf = path.into();
            let expanded = if path.starts_with("~") {
                if let Some(home) = dirs::home_dir() {
                    home.join(path.strip_prefix("~").unwrap_or(&path))
                } else {
                    path
                }
            } else {
                path
            };
            self.base_dir = Some(expanded);
            self
        }

        fn resolve(&self, identifier: &str) -> PathBuf {
            let path = Path::new(identifier);
            match &self.base_dir {
                Some(base) if path.is_relative() => base.join(path),
                _ => path.to_path_buf(),
            }
        }
    }

    impl ConfigSource for JsonFileSource {
        fn load(&self, identifier: &str) -> Result<PizzaConfig> {
            let path = self.resolve(identifier);
            let content = std::fs::read_to_string(&path).map_err(|e| Error::FileRead {
                path: path.clone(),
                source: e,
            })?;
            serde_json::from_str(&content).map_err(Error::from)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;
    use crate::config::OptionSet;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn test_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("marios.json");

        let config = PizzaConfig::new(9.99)
            .with_option_set(OptionSet::new("Toppings").with_option("Cheese", 1.50));
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let source = JsonFileSource::new();
        let loaded = source.load(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_handwritten_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("luigis.json");
        std::fs::write(
            &path,
            r#"{"base_price": 11.25, "option_sets": [{"name": "Crust", "options": [{"name": "Thin", "price": 0.0}]}]}"#,
        )
        .unwrap();

        let loaded = JsonFileSource::new().load(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.base_price(), 11.25);
        assert!(loaded.find_option_set("Crust").is_some());
    }

    #[test]
    fn test_relative_identifier_uses_base_dir() {
        let dir = tempdir().unwrap();
        let config = PizzaConfig::new(8.25);
        std::fs::write(
            dir.path().join("corner.json"),
            serde_json::to_string(&config).unwrap(),
        )
        .unwrap();

        let source = JsonFileSource::new().base_dir(dir.path());
        let loaded = source.load("corner.json").unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = JsonFileSource::new().load("/nonexistent/config.json");
        assert!(matches!(result.unwrap_err(), Error::FileRead { .. }));
    }

    #[test]
    fn test_malformed_content_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = JsonFileSource::new().load(path.to_str().unwrap());
        assert!(matches!(result.unwrap_err(), Error::Parse(_)));
    }
}
