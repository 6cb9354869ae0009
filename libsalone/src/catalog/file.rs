//! File-backed catalog source
//!
//! Reads all three catalogs from a single TOML document on disk. The
//! document is parsed at most once per process; concurrent first access
//! performs the load exactly once and later calls reuse the parsed result.
//!
//! Document format:
//!
//! ```toml
//! people = ["Heritage Guides", "Craft Makers"]
//! publications = ["Heritage Notes"]
//!
//! [[sections]]
//! name = "Heritage"
//! topics = ["Bunce Island", "Museums"]
//! ```

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::types::InterestSection;

use super::CatalogSource;

#[derive(Debug, Clone, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    sections: Vec<InterestSection>,
    #[serde(default)]
    people: Vec<String>,
    #[serde(default)]
    publications: Vec<String>,
}

/// Catalog source reading from a TOML document.
///
/// A drop-in substitute for [`super::fixed::FixedCatalogSource`]: same
/// contract, but retrieval can fail with `CatalogError::Read` or
/// `CatalogError::Parse`, which callers receive as values.
#[derive(Debug)]
pub struct FileCatalogSource {
    path: PathBuf,
    document: OnceCell<CatalogDocument>,
}

impl FileCatalogSource {
    /// Create a source reading from `path`. A leading `~` is expanded.
    pub fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(shellexpand::tilde(path).to_string()),
            document: OnceCell::new(),
        }
    }

    /// The parsed document, loading it on first use.
    ///
    /// A failed load leaves the cell empty, so a later call retries; only a
    /// successful parse is cached.
    async fn document(&self) -> Result<&CatalogDocument> {
        self.document
            .get_or_try_init(|| async {
                debug!(path = %self.path.display(), "loading catalog document");
                let content = tokio::fs::read_to_string(&self.path)
                    .await
                    .map_err(CatalogError::Read)?;
                let document = toml::from_str(&content).map_err(CatalogError::Parse)?;
                Ok(document)
            })
            .await
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn topics(&self) -> Result<Vec<InterestSection>> {
        Ok(self.document().await?.sections.clone())
    }

    async fn people(&self) -> Result<Vec<String>> {
        Ok(self.document().await?.people.clone())
    }

    async fn publications(&self) -> Result<Vec<String>> {
        Ok(self.document().await?.publications.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SaloneError;
    use std::io::Write;

    const CATALOG_TOML: &str = r#"
people = ["Heritage Guides", "Craft Makers"]
publications = ["Heritage Notes"]

[[sections]]
name = "Heritage"
topics = ["Bunce Island", "Museums"]

[[sections]]
name = "Languages"
topics = ["Krio", "Temne"]
"#;

    fn write_catalog(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_reads_all_three_catalogs() {
        let file = write_catalog(CATALOG_TOML);
        let source = FileCatalogSource::new(file.path().to_str().unwrap());

        let sections = source.topics().await.unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0], InterestSection::new("Heritage", ["Bunce Island", "Museums"]));

        assert_eq!(source.people().await.unwrap().len(), 2);
        assert_eq!(source.publications().await.unwrap(), vec!["Heritage Notes".to_string()]);
    }

    #[tokio::test]
    async fn test_repeated_retrieval_deep_equal() {
        let file = write_catalog(CATALOG_TOML);
        let source = FileCatalogSource::new(file.path().to_str().unwrap());

        let first = source.topics().await.unwrap();
        let second = source.topics().await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let source = FileCatalogSource::new("/nonexistent/salone-catalog.toml");

        let result = source.topics().await;
        assert!(matches!(
            result,
            Err(SaloneError::Catalog(CatalogError::Read(_)))
        ));
    }

    #[tokio::test]
    async fn test_malformed_document_is_parse_error() {
        let file = write_catalog("people = \"not a list\"");
        let source = FileCatalogSource::new(file.path().to_str().unwrap());

        let result = source.people().await;
        assert!(matches!(
            result,
            Err(SaloneError::Catalog(CatalogError::Parse(_)))
        ));
    }

    #[tokio::test]
    async fn test_empty_document_yields_empty_catalogs() {
        let file = write_catalog("");
        let source = FileCatalogSource::new(file.path().to_str().unwrap());

        assert!(source.topics().await.unwrap().is_empty());
        assert!(source.people().await.unwrap().is_empty());
        assert!(source.publications().await.unwrap().is_empty());
    }
}
