//! Destination entries and their category tags

use serde::{Deserialize, Serialize};

/// Shown whenever a catalog entry has no descriptive text of its own.
const MISSING_BLURB: &str = "No description available yet.";

/// The three destination categories
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Beach,
    Temple,
    Country,
}

impl Category {
    /// All categories in display order: beach, then temple, then country.
    pub const ORDERED: [Category; 3] = [Category::Beach, Category::Temple, Category::Country];

    /// Keyword that broadens a query to this whole category
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Category::Beach => "beach",
            Category::Temple => "temple",
            Category::Country => "country",
        }
    }

    /// Human-readable label for card headers
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Beach => "Beach",
            Category::Temple => "Temple",
            Category::Country => "Country",
        }
    }
}

/// A single destination entry from the catalog
///
/// Only `name` is required; everything else degrades to a placeholder at
/// display time. Country entries carry the country name in `name` itself and
/// describe themselves through `short` rather than `description`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Destination {
    /// Destination name
    pub name: String,
    /// Country the destination is in (beaches and temples)
    #[serde(default)]
    pub country: Option<String>,
    /// Image shown on the card (display-only)
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
    /// Long-form description (beaches and temples)
    #[serde(default)]
    pub description: Option<String>,
    /// Short blurb (country entries)
    #[serde(default)]
    pub short: Option<String>,
    /// Opaque identifier used for de-duplication when present
    #[serde(default)]
    pub id: Option<String>,
}

impl Destination {
    /// Create an entry with just a name
    #[must_use]
    pub fn named<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            country: None,
            image_url: None,
            description: None,
            short: None,
            id: None,
        }
    }

    /// Title shown on the card; a blank name degrades to a placeholder
    #[must_use]
    pub fn display_title(&self) -> &str {
        if self.name.trim().is_empty() {
            "Unnamed destination"
        } else {
            &self.name
        }
    }

    /// Card text: description, else the short blurb, else a placeholder
    #[must_use]
    pub fn blurb(&self) -> &str {
        [self.description.as_deref(), self.short.as_deref()]
            .into_iter()
            .flatten()
            .find(|text| !text.trim().is_empty())
            .unwrap_or(MISSING_BLURB)
    }

    /// Lowercased text scanned by the matcher: name plus country,
    /// description and short blurb
    #[must_use]
    pub fn haystack(&self) -> String {
        let mut text = self.name.clone();
        for part in [&self.country, &self.description, &self.short] {
            if let Some(part) = part {
                text.push(' ');
                text.push_str(part);
            }
        }
        text.to_lowercase()
    }

    /// Whether two entries refer to the same destination.
    ///
    /// Compared by `id` when both sides carry one, otherwise by full value
    /// equality; no stronger key is assumed.
    #[must_use]
    pub fn same_entry(&self, other: &Destination) -> bool {
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            _ => self == other,
        }
    }
}
