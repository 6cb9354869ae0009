//! Selection state
//!
//! This module owns the mutable half of the interests core: one selection
//! set per category (topics, people, publications), each an independent
//! reactive container observed by presentation layers.
//!
//! # Architecture
//!
//! Each category is a `tokio::sync::watch` channel holding the current
//! snapshot. A toggle is a single atomic read-modify-write through the
//! channel sender; observers subscribe and receive snapshots, with rapid
//! updates conflated to the latest value for slow consumers. Dropping a
//! subscription stops delivery without affecting anyone else.
//!
//! # Example
//!
//! ```
//! use libsalone::store::SelectionStore;
//! use libsalone::types::TopicSelection;
//! use tokio_stream::StreamExt;
//!
//! # async fn example() {
//! let store = SelectionStore::new();
//! let mut selections = store.observe_topics();
//!
//! // The current (empty) snapshot is delivered first.
//! assert!(selections.next().await.unwrap().is_empty());
//!
//! store.toggle_topic(TopicSelection::new("Heritage", "Bunce Island"));
//! assert_eq!(selections.next().await.unwrap().len(), 1);
//! # }
//! ```

use std::collections::HashSet;
use std::hash::Hash;

use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tracing::debug;

use crate::types::TopicSelection;

/// Snapshot stream for one selection category.
///
/// Yields the current snapshot immediately on subscription, then a new
/// snapshot after each toggle of that category. The stream never ends while
/// its store is alive; dropping it unsubscribes.
pub type SelectionStream<T> = WatchStream<HashSet<T>>;

/// Add `item` to `set` if absent, remove it if present.
///
/// The symmetric difference of `set` with `{item}`. Toggling the same item
/// twice returns the set to its original value.
pub fn toggled<T: Eq + Hash>(mut set: HashSet<T>, item: T) -> HashSet<T> {
    if !set.remove(&item) {
        set.insert(item);
    }
    set
}

/// Holds the selected identifiers for each category.
///
/// The store is the only owner of selection state. Mutations to one category
/// serialize through that category's channel; mutations to different
/// categories proceed independently. Consumers read state through
/// [`SelectionStore::observe_topics`]-style streams or the snapshot
/// accessors.
///
/// Selection sets start empty at construction and live until the store is
/// dropped; there is no persistence.
pub struct SelectionStore {
    topics: watch::Sender<HashSet<TopicSelection>>,
    people: watch::Sender<HashSet<String>>,
    publications: watch::Sender<HashSet<String>>,
}

impl SelectionStore {
    /// Create a store with all three selection sets empty.
    pub fn new() -> Self {
        Self {
            topics: watch::Sender::new(HashSet::new()),
            people: watch::Sender::new(HashSet::new()),
            publications: watch::Sender::new(HashSet::new()),
        }
    }

    /// Toggle one topic in the topic selection set.
    pub fn toggle_topic(&self, selection: TopicSelection) {
        debug!(section = %selection.section, topic = %selection.topic, "toggle topic");
        self.topics
            .send_modify(|set| *set = toggled(std::mem::take(set), selection));
    }

    /// Toggle one person in the people selection set.
    pub fn toggle_person(&self, person: String) {
        debug!(person = %person, "toggle person");
        self.people
            .send_modify(|set| *set = toggled(std::mem::take(set), person));
    }

    /// Toggle one publication in the publication selection set.
    pub fn toggle_publication(&self, publication: String) {
        debug!(publication = %publication, "toggle publication");
        self.publications
            .send_modify(|set| *set = toggled(std::mem::take(set), publication));
    }

    /// Observe topic selections.
    pub fn observe_topics(&self) -> SelectionStream<TopicSelection> {
        WatchStream::new(self.topics.subscribe())
    }

    /// Observe people selections.
    pub fn observe_people(&self) -> SelectionStream<String> {
        WatchStream::new(self.people.subscribe())
    }

    /// Observe publication selections.
    pub fn observe_publications(&self) -> SelectionStream<String> {
        WatchStream::new(self.publications.subscribe())
    }

    /// Current topic selection snapshot.
    pub fn selected_topics(&self) -> HashSet<TopicSelection> {
        self.topics.borrow().clone()
    }

    /// Current people selection snapshot.
    pub fn selected_people(&self) -> HashSet<String> {
        self.people.borrow().clone()
    }

    /// Current publication selection snapshot.
    pub fn selected_publications(&self) -> HashSet<String> {
        self.publications.borrow().clone()
    }

    /// Number of live observers across all categories.
    ///
    /// Useful for debugging; not for control flow.
    pub fn observer_count(&self) -> usize {
        self.topics.receiver_count()
            + self.people.receiver_count()
            + self.publications.receiver_count()
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_stream::StreamExt;

    fn heritage() -> TopicSelection {
        TopicSelection::new("Heritage", "Bunce Island")
    }

    #[test]
    fn test_toggled_adds_absent_item() {
        let set = toggled(HashSet::new(), "Krio");
        assert!(set.contains("Krio"));
    }

    #[test]
    fn test_toggled_removes_present_item() {
        let set = toggled(HashSet::from(["Krio"]), "Krio");
        assert!(set.is_empty());
    }

    #[test]
    fn test_toggled_is_involution() {
        let initial = HashSet::from(["Krio", "Mende"]);

        let once = toggled(initial.clone(), "Temne");
        let twice = toggled(once, "Temne");

        assert_eq!(twice, initial);
    }

    #[test]
    fn test_toggled_order_independent() {
        let a = toggled(toggled(HashSet::new(), "Krio"), "Mende");
        let b = toggled(toggled(HashSet::new(), "Mende"), "Krio");

        assert_eq!(a, b);
    }

    #[test]
    fn test_store_starts_empty() {
        let store = SelectionStore::new();

        assert!(store.selected_topics().is_empty());
        assert!(store.selected_people().is_empty());
        assert!(store.selected_publications().is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_initial_set() {
        let store = SelectionStore::new();

        store.toggle_topic(heritage());
        store.toggle_topic(heritage());

        assert!(store.selected_topics().is_empty());
    }

    #[test]
    fn test_categories_independent() {
        let store = SelectionStore::new();

        store.toggle_topic(heritage());
        store.toggle_person("Community Storytellers".to_string());

        assert_eq!(store.selected_topics().len(), 1);
        assert_eq!(store.selected_people().len(), 1);
        assert!(store.selected_publications().is_empty());
    }

    #[tokio::test]
    async fn test_observe_replays_current_snapshot_first() {
        let store = SelectionStore::new();
        store.toggle_publication("Heritage Notes".to_string());

        // Subscribed after the toggle; the first emission is the current set.
        let mut publications = store.observe_publications();
        let snapshot = publications.next().await.unwrap();

        assert_eq!(snapshot, HashSet::from(["Heritage Notes".to_string()]));
    }

    #[tokio::test]
    async fn test_observe_delivers_each_toggle() {
        let store = SelectionStore::new();
        let mut topics = store.observe_topics();

        assert!(topics.next().await.unwrap().is_empty());

        store.toggle_topic(heritage());
        assert!(topics.next().await.unwrap().contains(&heritage()));

        store.toggle_topic(heritage());
        assert!(topics.next().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dropped_observer_does_not_affect_others() {
        let store = SelectionStore::new();

        let dropped = store.observe_people();
        let mut kept = store.observe_people();
        assert!(kept.next().await.unwrap().is_empty());

        drop(dropped);
        store.toggle_person("Craft Makers".to_string());

        assert_eq!(
            kept.next().await.unwrap(),
            HashSet::from(["Craft Makers".to_string()])
        );
    }

    #[tokio::test]
    async fn test_observer_count() {
        let store = SelectionStore::new();
        assert_eq!(store.observer_count(), 0);

        let _topics = store.observe_topics();
        let _people = store.observe_people();
        assert_eq!(store.observer_count(), 2);
    }
}
