//! Fixed in-memory catalog source
//!
//! Returns a hardcoded listing of topic sections, people and publications.
//! This is the dataset the reader ships with; each catalog is materialized
//! lazily, exactly once, and then shared for the rest of the process.

use std::sync::OnceLock;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::InterestSection;

use super::CatalogSource;

/// Catalog source backed by the built-in dataset.
///
/// Retrieval never fails; the `Result` in the signatures exists so this
/// source and the fallible ones share one contract.
#[derive(Debug, Default)]
pub struct FixedCatalogSource {
    topics: OnceLock<Vec<InterestSection>>,
    people: OnceLock<Vec<String>>,
    publications: OnceLock<Vec<String>>,
}

impl FixedCatalogSource {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogSource for FixedCatalogSource {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn topics(&self) -> Result<Vec<InterestSection>> {
        Ok(self.topics.get_or_init(topic_sections).clone())
    }

    async fn people(&self) -> Result<Vec<String>> {
        Ok(self.people.get_or_init(people).clone())
    }

    async fn publications(&self) -> Result<Vec<String>> {
        Ok(self.publications.get_or_init(publications).clone())
    }
}

fn topic_sections() -> Vec<InterestSection> {
    vec![
        InterestSection::new(
            "Arts & Crafts",
            ["Wood Carving", "Weaving", "Beadwork", "Painting"],
        ),
        InterestSection::new(
            "Music & Dance",
            ["Traditional Music", "Bubu", "Cultural Dance", "Modern Afrobeats"],
        ),
        InterestSection::new(
            "Heritage",
            ["Bunce Island", "Freetown History", "Heritage Preservation", "Museums"],
        ),
        InterestSection::new(
            "Cuisine",
            ["Cassava Leaf", "Groundnut Stew", "Rice Dishes", "Street Food"],
        ),
        InterestSection::new("Languages", ["Krio", "Mende", "Temne", "Limba"]),
    ]
}

fn people() -> Vec<String> {
    [
        "Community Storytellers",
        "Traditional Drummers",
        "Cultural Dancers",
        "Local Visual Artists",
        "Craft Makers",
        "Heritage Guides",
        "Food Vendors & Chefs",
    ]
    .map(String::from)
    .to_vec()
}

fn publications() -> Vec<String> {
    [
        "Salone Culture Digest",
        "Heritage Notes",
        "Arts & Crafts Weekly",
        "Food & Lifestyle",
        "Music & Dance Spotlight",
    ]
    .map(String::from)
    .to_vec()
}
