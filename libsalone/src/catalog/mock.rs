//! Mock catalog source for testing
//!
//! A configurable source that can simulate failures and latency. It lets
//! consumer code exercise the error and degradation paths without a real
//! file or network behind the catalog contract.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;

use crate::error::{CatalogError, Result};
use crate::types::InterestSection;

use super::CatalogSource;

/// Configuration for mock source behavior
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Source name reported by `CatalogSource::name`
    pub name: String,

    /// Topic catalog returned on success
    pub sections: Vec<InterestSection>,

    /// People catalog returned on success
    pub people: Vec<String>,

    /// Publication catalog returned on success
    pub publications: Vec<String>,

    /// If set, every retrieval fails with `CatalogError::Unavailable`
    pub fail_with: Option<String>,

    /// Delay before completing operations (simulates a slow backing store)
    pub delay: Duration,

    /// Number of retrieval calls made, across all three catalogs
    pub call_count: Arc<Mutex<usize>>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            name: "mock".to_string(),
            sections: vec![InterestSection::new("Heritage", ["Bunce Island"])],
            people: vec!["Heritage Guides".to_string()],
            publications: vec!["Heritage Notes".to_string()],
            fail_with: None,
            delay: Duration::from_millis(0),
            call_count: Arc::new(Mutex::new(0)),
        }
    }
}

/// Mock catalog source for testing
#[derive(Debug)]
pub struct MockCatalogSource {
    config: MockConfig,
}

impl MockCatalogSource {
    /// Create a mock source with the given configuration
    pub fn new(config: MockConfig) -> Self {
        Self { config }
    }

    /// Create a mock source that always succeeds with the default catalogs
    pub fn success() -> Self {
        Self::new(MockConfig::default())
    }

    /// Create a mock source whose retrievals all fail with the given message
    pub fn failing(error: &str) -> Self {
        Self::new(MockConfig {
            fail_with: Some(error.to_string()),
            ..Default::default()
        })
    }

    /// Create a mock source that completes after a delay
    pub fn with_delay(delay: Duration) -> Self {
        Self::new(MockConfig {
            delay,
            ..Default::default()
        })
    }

    /// Create a mock source serving the given catalogs
    pub fn with_catalogs(
        sections: Vec<InterestSection>,
        people: Vec<String>,
        publications: Vec<String>,
    ) -> Self {
        Self::new(MockConfig {
            sections,
            people,
            publications,
            ..Default::default()
        })
    }

    /// Get the number of retrieval calls made against this source
    pub fn call_count(&self) -> usize {
        *self.config.call_count.lock().unwrap()
    }

    async fn before_retrieval(&self) -> Result<()> {
        *self.config.call_count.lock().unwrap() += 1;

        if !self.config.delay.is_zero() {
            sleep(self.config.delay).await;
        }

        if let Some(error) = &self.config.fail_with {
            return Err(CatalogError::Unavailable(error.clone()).into());
        }

        Ok(())
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    fn name(&self) -> &str {
        &self.config.name
    }

    async fn topics(&self) -> Result<Vec<InterestSection>> {
        self.before_retrieval().await?;
        Ok(self.config.sections.clone())
    }

    async fn people(&self) -> Result<Vec<String>> {
        self.before_retrieval().await?;
        Ok(self.config.people.clone())
    }

    async fn publications(&self) -> Result<Vec<String>> {
        self.before_retrieval().await?;
        Ok(self.config.publications.clone())
    }
}
