//! Timezone Resolution Module
//!
//! This module maps a destination's country (or name) to an IANA timezone
//! identifier and formats the local-time label shown on result cards.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::models::Destination;

/// Zone identifier used when no table entry matches
const DEFAULT_ZONE: &str = "UTC";

/// Countries and places covered by the built-in table.
///
/// Keys are matched exactly against a destination's country, then its name.
const BUILTIN_ZONES: &[(&str, &str)] = &[
    ("Thailand", "Asia/Bangkok"),
    ("Cambodia", "Asia/Phnom_Penh"),
    ("Japan", "Asia/Tokyo"),
    ("India", "Asia/Kolkata"),
    ("Indonesia", "Asia/Jakarta"),
    ("Bali", "Asia/Makassar"),
    ("Greece", "Europe/Athens"),
    ("Italy", "Europe/Rome"),
    ("France", "Europe/Paris"),
    ("French Polynesia", "Pacific/Tahiti"),
    ("New Zealand", "Pacific/Auckland"),
    ("Australia", "Australia/Sydney"),
    ("Brazil", "America/Sao_Paulo"),
    ("Mexico", "America/Mexico_City"),
];

/// Immutable lookup table from country or place name to IANA timezone id
#[derive(Debug, Clone)]
pub struct TimezoneTable {
    entries: HashMap<String, String>,
    default: String,
}

impl TimezoneTable {
    /// Build a table from (key, zone id) pairs.
    ///
    /// The default entry is always present, so resolution can never come up
    /// empty.
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let entries = pairs
            .iter()
            .map(|(key, zone)| ((*key).to_string(), (*zone).to_string()))
            .collect();

        Self {
            entries,
            default: DEFAULT_ZONE.to_string(),
        }
    }

    /// The built-in table covering every destination in the fallback catalog
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_ZONES)
    }

    /// Resolve a destination to a timezone id.
    ///
    /// Resolution order: exact match on the destination's country, then on
    /// its name, then the table default. Never returns an empty string.
    #[must_use]
    pub fn resolve(&self, destination: &Destination) -> &str {
        if let Some(country) = &destination.country {
            if let Some(zone) = self.entries.get(country) {
                return zone;
            }
        }
        if let Some(zone) = self.entries.get(&destination.name) {
            return zone;
        }
        &self.default
    }
}

/// Format `now` in the given zone for display on a card.
///
/// An unknown zone id falls back to plain UTC formatting rather than failing
/// the render.
#[must_use]
pub fn local_time_label(zone_id: &str, now: DateTime<Utc>) -> String {
    match zone_id.parse::<Tz>() {
        Ok(zone) => now.with_timezone(&zone).format("%H:%M (%Z)").to_string(),
        Err(_) => {
            debug!("Unknown timezone id {zone_id}, formatting as UTC");
            now.format("%H:%M (UTC)").to_string()
        }
    }
}
