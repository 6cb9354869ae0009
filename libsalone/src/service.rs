//! Service facade over catalogs and selections
//!
//! `InterestsService` is the single entry point consumed by presentation
//! layers: catalog retrieval delegates to the configured
//! [`CatalogSource`], selection state lives in an owned
//! [`SelectionStore`]. The service is constructed explicitly and handed to
//! consumers; there is no global instance.
//!
//! # Example
//!
//! ```
//! use libsalone::service::InterestsService;
//! use libsalone::types::TopicSelection;
//!
//! # async fn example() -> libsalone::Result<()> {
//! let service = InterestsService::default();
//!
//! for section in service.get_topics().await? {
//!     println!("{}", section.name);
//! }
//!
//! service.toggle_topic(TopicSelection::new("Heritage", "Bunce Island"));
//! assert_eq!(service.selected_topics().len(), 1);
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::catalog::{self, fixed::FixedCatalogSource, CatalogSource};
use crate::config::Config;
use crate::error::Result;
use crate::store::{SelectionStore, SelectionStream};
use crate::types::{InterestSection, TopicSelection};

/// Facade exposing the full interests surface.
///
/// Catalogs are read-only and shared; selections are owned by the service's
/// store and mutated only through the `toggle_*` methods. Cheap to share
/// behind an `Arc` across concurrent callers.
pub struct InterestsService {
    source: Arc<dyn CatalogSource>,
    store: SelectionStore,
}

impl InterestsService {
    /// Create a service over the given catalog source, with empty selections.
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            store: SelectionStore::new(),
        }
    }

    /// Create a service over the catalog source named by the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration names an unknown source or a
    /// file source without a path.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(catalog::from_config(config)?))
    }

    /// Name of the underlying catalog source.
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Retrieve the topic catalog.
    pub async fn get_topics(&self) -> Result<Vec<InterestSection>> {
        debug!(source = self.source.name(), "fetch topic catalog");
        self.source.topics().await
    }

    /// Retrieve the people catalog.
    pub async fn get_people(&self) -> Result<Vec<String>> {
        debug!(source = self.source.name(), "fetch people catalog");
        self.source.people().await
    }

    /// Retrieve the publication catalog.
    pub async fn get_publications(&self) -> Result<Vec<String>> {
        debug!(source = self.source.name(), "fetch publication catalog");
        self.source.publications().await
    }

    /// Toggle one topic selection.
    pub fn toggle_topic(&self, selection: TopicSelection) {
        self.store.toggle_topic(selection);
    }

    /// Toggle one person selection.
    pub fn toggle_person(&self, person: String) {
        self.store.toggle_person(person);
    }

    /// Toggle one publication selection.
    pub fn toggle_publication(&self, publication: String) {
        self.store.toggle_publication(publication);
    }

    /// Observe topic selections; see [`SelectionStore::observe_topics`].
    pub fn observe_topics(&self) -> SelectionStream<TopicSelection> {
        self.store.observe_topics()
    }

    /// Observe people selections.
    pub fn observe_people(&self) -> SelectionStream<String> {
        self.store.observe_people()
    }

    /// Observe publication selections.
    pub fn observe_publications(&self) -> SelectionStream<String> {
        self.store.observe_publications()
    }

    /// Current topic selection snapshot.
    pub fn selected_topics(&self) -> HashSet<TopicSelection> {
        self.store.selected_topics()
    }

    /// Current people selection snapshot.
    pub fn selected_people(&self) -> HashSet<String> {
        self.store.selected_people()
    }

    /// Current publication selection snapshot.
    pub fn selected_publications(&self) -> HashSet<String> {
        self.store.selected_publications()
    }
}

impl Default for InterestsService {
    /// A service over the built-in fixed catalogs.
    fn default() -> Self {
        Self::new(Arc::new(FixedCatalogSource::new()))
    }
}
