//! Catalog container and the wire shape of the remote catalog document

use serde::{Deserialize, Serialize};

use super::destination::{Category, Destination};

/// In-memory destination catalog for the session
///
/// Constructed once at startup, either from the remote document or from the
/// built-in fallback, and read-only afterwards.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Catalog {
    /// Beach destinations, in catalog order
    pub beaches: Vec<Destination>,
    /// Temple destinations, in catalog order
    pub temples: Vec<Destination>,
    /// Country destinations, in catalog order
    pub countries: Vec<Destination>,
}

impl Catalog {
    /// Entries of one category, in catalog order
    #[must_use]
    pub fn section(&self, category: Category) -> &[Destination] {
        match category {
            Category::Beach => &self.beaches,
            Category::Temple => &self.temples,
            Category::Country => &self.countries,
        }
    }

    /// Total number of entries across all categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.beaches.len() + self.temples.len() + self.countries.len()
    }

    /// Whether the catalog holds no entries at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Built-in catalog used whenever the remote document is unavailable
    /// or structurally invalid
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            beaches: vec![
                Destination {
                    name: "Bora Bora Lagoon".to_string(),
                    country: Some("French Polynesia".to_string()),
                    image_url: Some("/img/beaches/bora-bora.jpg".to_string()),
                    description: Some(
                        "Turquoise lagoon ringed by volcanic peaks and overwater bungalows."
                            .to_string(),
                    ),
                    short: None,
                    id: Some("bora-bora".to_string()),
                },
                Destination {
                    name: "Maya Bay".to_string(),
                    country: Some("Thailand".to_string()),
                    image_url: Some("/img/beaches/maya-bay.jpg".to_string()),
                    description: Some(
                        "Sheltered cove of limestone cliffs on Phi Phi Leh island.".to_string(),
                    ),
                    short: None,
                    id: Some("maya-bay".to_string()),
                },
                Destination {
                    name: "Navagio Beach".to_string(),
                    country: Some("Greece".to_string()),
                    image_url: Some("/img/beaches/navagio.jpg".to_string()),
                    description: Some(
                        "Shipwreck cove beneath sheer white cliffs, reachable only by boat."
                            .to_string(),
                    ),
                    short: None,
                    id: Some("navagio".to_string()),
                },
            ],
            temples: vec![
                Destination {
                    name: "Angkor Wat".to_string(),
                    country: Some("Cambodia".to_string()),
                    image_url: Some("/img/temples/angkor-wat.jpg".to_string()),
                    description: Some(
                        "Vast 12th-century complex and the largest religious monument on earth."
                            .to_string(),
                    ),
                    short: None,
                    id: Some("angkor-wat".to_string()),
                },
                Destination {
                    name: "Kinkaku-ji".to_string(),
                    country: Some("Japan".to_string()),
                    image_url: Some("/img/temples/kinkakuji.jpg".to_string()),
                    description: Some(
                        "Kyoto's Golden Pavilion, mirrored in its surrounding pond.".to_string(),
                    ),
                    short: None,
                    id: Some("kinkakuji".to_string()),
                },
                Destination {
                    name: "Meenakshi Amman Temple".to_string(),
                    country: Some("India".to_string()),
                    image_url: Some("/img/temples/meenakshi.jpg".to_string()),
                    description: Some(
                        "Towering gopurams covered in thousands of painted figures.".to_string(),
                    ),
                    short: None,
                    id: Some("meenakshi".to_string()),
                },
            ],
            countries: vec![
                Destination {
                    name: "Japan".to_string(),
                    country: None,
                    image_url: Some("/img/countries/japan.jpg".to_string()),
                    description: None,
                    short: Some(
                        "Shrines, alpine villages and neon cities in one compact archipelago."
                            .to_string(),
                    ),
                    id: Some("japan".to_string()),
                },
                Destination {
                    name: "Italy".to_string(),
                    country: None,
                    image_url: Some("/img/countries/italy.jpg".to_string()),
                    description: None,
                    short: Some(
                        "Renaissance cities, coastal villages and long lunches.".to_string(),
                    ),
                    id: Some("italy".to_string()),
                },
                Destination {
                    name: "New Zealand".to_string(),
                    country: None,
                    image_url: Some("/img/countries/new-zealand.jpg".to_string()),
                    description: None,
                    short: Some(
                        "Fjords, glaciers and geothermal valleys at the edge of the Pacific."
                            .to_string(),
                    ),
                    id: Some("new-zealand".to_string()),
                },
            ],
        }
    }
}

/// Raw shape of the remote catalog document
///
/// Any subset of the three keys may be present; a document with none of them
/// is structurally invalid and the loader rejects it.
#[derive(Debug, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub beaches: Option<Vec<Destination>>,
    #[serde(default)]
    pub temples: Option<Vec<Destination>>,
    #[serde(default)]
    pub countries: Option<Vec<Destination>>,
}

impl CatalogDocument {
    /// Structural validity check: at least one expected key present
    #[must_use]
    pub fn has_any_section(&self) -> bool {
        self.beaches.is_some() || self.temples.is_some() || self.countries.is_some()
    }
}

impl From<CatalogDocument> for Catalog {
    fn from(document: CatalogDocument) -> Self {
        Catalog {
            beaches: document.beaches.unwrap_or_default(),
            temples: document.temples.unwrap_or_default(),
            countries: document.countries.unwrap_or_default(),
        }
    }
}
