//! Core types for the Salone interests catalogs

use serde::{Deserialize, Serialize};

/// A named grouping of selectable topics within the topic catalog.
///
/// Sections are immutable once materialized; `name` is unique within a
/// catalog listing and `topics` keeps the source's ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestSection {
    pub name: String,
    pub topics: Vec<String>,
}

impl InterestSection {
    pub fn new(name: impl Into<String>, topics: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            topics: topics.into_iter().map(Into::into).collect(),
        }
    }
}

/// Identifies one selectable topic inside one section.
///
/// Equality and hashing are structural: two values naming the same section
/// and topic are the same selection, regardless of where they were built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TopicSelection {
    pub section: String,
    pub topic: String,
}

impl TopicSelection {
    pub fn new(section: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            topic: topic.into(),
        }
    }
}
