//! Catalog sources
//!
//! This module provides a unified trait for supplying the three read-only
//! catalogs (topic sections, people, publications). Retrieval is async and
//! returns errors as values, so a file- or network-backed source substitutes
//! for the built-in fixed data without any interface change.
//!
//! # Examples
//!
//! ```no_run
//! use libsalone::catalog::{fixed::FixedCatalogSource, CatalogSource};
//!
//! # async fn example() -> libsalone::Result<()> {
//! let source = FixedCatalogSource::new();
//!
//! for section in source.topics().await? {
//!     println!("{}: {}", section.name, section.topics.join(", "));
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::types::InterestSection;

pub mod file;
pub mod fixed;

// Mock source is available for all builds (not just tests) to support integration tests
pub mod mock;

/// Trait for unified catalog retrieval across sources
///
/// Catalogs are immutable for the lifetime of the process: repeated calls
/// return deep-equal content. Implementations may suspend the caller (to
/// model a remote or on-disk source) but perform no observable side effects;
/// lazy materialization is an internal caching detail.
#[async_trait]
pub trait CatalogSource: Send + Sync + std::fmt::Debug {
    /// Get the source name
    ///
    /// Returns a lowercase identifier for the source (e.g., "fixed", "file"),
    /// used in logs and error messages.
    fn name(&self) -> &str;

    /// Retrieve the topic catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the backing data cannot be read or parsed.
    /// The fixed source always succeeds.
    async fn topics(&self) -> Result<Vec<InterestSection>>;

    /// Retrieve the people catalog
    ///
    /// # Errors
    ///
    /// Same conditions as [`CatalogSource::topics`].
    async fn people(&self) -> Result<Vec<String>>;

    /// Retrieve the publication catalog
    ///
    /// # Errors
    ///
    /// Same conditions as [`CatalogSource::topics`].
    async fn publications(&self) -> Result<Vec<String>>;
}

/// Build the catalog source named by the configuration
///
/// # Errors
///
/// Returns `ConfigError::MissingField` if a file source is requested without
/// a path, or `ConfigError::UnknownSource` for an unrecognized source kind.
pub fn from_config(config: &Config) -> Result<Arc<dyn CatalogSource>> {
    match config.catalog.source.as_str() {
        "fixed" => Ok(Arc::new(fixed::FixedCatalogSource::new())),
        "file" => {
            let path = config
                .catalog
                .path
                .as_deref()
                .ok_or_else(|| ConfigError::MissingField("catalog.path".to_string()))?;
            Ok(Arc::new(file::FileCatalogSource::new(path)))
        }
        other => Err(ConfigError::UnknownSource(other.to_string()).into()),
    }
}
