//! Keyword and category search over the destination catalog.
//!
//! Matching is additive: a category keyword anywhere in the query includes
//! that whole category, and any entry whose text contains the query matches
//! as well. Results keep catalog order, grouped beach, then temple, then
//! country. Given the same query and catalog the output is always identical.

use crate::models::{Catalog, Category, Destination};

/// Guaranteed minimum number of results for an explicitly requested category,
/// provided its source list has that many entries
const CATEGORY_MIN_RESULTS: usize = 2;

/// A single search hit: the category it was found under plus the entry itself
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    /// Category the entry was matched under
    pub category: Category,
    /// The matched catalog entry
    pub destination: Destination,
}

/// Caller-facing classification of a search attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// At least one match to render
    Results(Vec<Match>),
    /// No query was supplied; prompt for a keyword instead of searching
    EmptyQuery,
    /// The query ran but nothing matched, even after backfill
    NoResults,
    /// The catalog has not finished loading yet
    NotLoaded,
}

impl SearchOutcome {
    /// Run the full query pipeline for raw user input
    #[must_use]
    pub fn run(raw_query: &str, catalog: Option<&Catalog>) -> Self {
        let Some(catalog) = catalog else {
            return SearchOutcome::NotLoaded;
        };
        let Some(query) = prepare_query(raw_query) else {
            return SearchOutcome::EmptyQuery;
        };

        let matches = search(&query, catalog);
        if matches.is_empty() {
            SearchOutcome::NoResults
        } else {
            SearchOutcome::Results(matches)
        }
    }
}

/// Normalize raw input for matching; `None` means no query was supplied
#[must_use]
pub fn prepare_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Search the catalog for a prepared query.
///
/// `query` must be non-empty and lowercase (see [`prepare_query`]); what to
/// show for empty input is the caller's decision, not a search.
#[must_use]
pub fn search(query: &str, catalog: &Catalog) -> Vec<Match> {
    let mut matches = Vec::new();

    for category in Category::ORDERED {
        let keyword_requested = query.contains(category.keyword());
        let section = catalog.section(category);

        for destination in section {
            if keyword_requested || destination.haystack().contains(query) {
                matches.push(Match {
                    category,
                    destination: destination.clone(),
                });
            }
        }

        if keyword_requested {
            backfill(&mut matches, category, section);
        }
    }

    matches
}

/// Top up an explicitly requested category to the guaranteed minimum,
/// in catalog order, skipping entries already matched.
fn backfill(matches: &mut Vec<Match>, category: Category, section: &[Destination]) {
    let mut count = matches.iter().filter(|m| m.category == category).count();

    for destination in section {
        if count >= CATEGORY_MIN_RESULTS {
            break;
        }
        let already_matched = matches
            .iter()
            .any(|m| m.category == category && m.destination.same_entry(destination));
        if !already_matched {
            matches.push(Match {
                category,
                destination: destination.clone(),
            });
            count += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn test_catalog() -> Catalog {
        Catalog::fallback()
    }

    #[test]
    fn test_prepare_query_trims_and_lowercases() {
        assert_eq!(prepare_query("  Angkor "), Some("angkor".to_string()));
        assert_eq!(prepare_query(""), None);
        assert_eq!(prepare_query("   "), None);
    }

    #[rstest]
    #[case("angkor", "Angkor Wat")]
    #[case("maya", "Maya Bay")]
    #[case("navagio", "Navagio Beach")]
    fn test_name_substring_returns_item(#[case] query: &str, #[case] expected: &str) {
        let matches = search(query, &test_catalog());
        assert!(matches.iter().any(|m| m.destination.name == expected));
    }

    #[test]
    fn test_angkor_yields_exactly_one_temple_match() {
        let matches = search("angkor", &test_catalog());
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].category, Category::Temple);
        assert_eq!(matches[0].destination.name, "Angkor Wat");
    }

    #[rstest]
    #[case("beach", Category::Beach)]
    #[case("temple", Category::Temple)]
    #[case("country", Category::Country)]
    fn test_category_keyword_returns_at_least_two(
        #[case] query: &str,
        #[case] category: Category,
    ) {
        let catalog = test_catalog();
        assert!(catalog.section(category).len() >= 2);

        let matches = search(query, &catalog);
        let tagged = matches.iter().filter(|m| m.category == category).count();
        assert!(tagged >= 2, "expected >=2 {category:?} matches, got {tagged}");
    }

    #[test]
    fn test_keyword_matches_entries_whose_names_lack_it() {
        // None of the fallback beaches have "beach" in every name; the
        // keyword must still pull the whole category.
        let matches = search("beach", &test_catalog());
        assert!(matches.iter().any(|m| m.destination.name == "Maya Bay"));
        assert!(matches.iter().any(|m| m.destination.name == "Bora Bora Lagoon"));
    }

    #[test]
    fn test_single_country_cannot_reach_two() {
        let catalog = Catalog {
            countries: vec![Destination::named("Japan")],
            ..Catalog::default()
        };

        let matches = search("country", &catalog);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].category, Category::Country);
        assert_eq!(matches[0].destination.name, "Japan");
    }

    #[test]
    fn test_grouping_follows_fixed_category_order() {
        // "a" appears in entries of every category of the fallback catalog.
        let matches = search("a", &test_catalog());

        let first_temple = matches
            .iter()
            .position(|m| m.category == Category::Temple)
            .expect("some temple match");
        let last_beach = matches
            .iter()
            .rposition(|m| m.category == Category::Beach)
            .expect("some beach match");
        let first_country = matches
            .iter()
            .position(|m| m.category == Category::Country)
            .expect("some country match");
        let last_temple = matches
            .iter()
            .rposition(|m| m.category == Category::Temple)
            .expect("some temple match");

        assert!(last_beach < first_temple);
        assert!(last_temple < first_country);
    }

    #[test]
    fn test_matches_keep_catalog_order_within_category() {
        let catalog = test_catalog();
        let matches = search("beach", &catalog);
        let beach_names: Vec<&str> = matches
            .iter()
            .filter(|m| m.category == Category::Beach)
            .map(|m| m.destination.name.as_str())
            .collect();
        let catalog_names: Vec<&str> = catalog
            .beaches
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(beach_names, catalog_names);
    }

    #[test]
    fn test_search_is_deterministic() {
        let catalog = test_catalog();
        let first = search("temple", &catalog);
        let second = search("temple", &catalog);
        assert_eq!(first, second);
    }

    #[test]
    fn test_query_may_set_multiple_category_flags() {
        let matches = search("beach temple", &test_catalog());
        assert!(matches.iter().any(|m| m.category == Category::Beach));
        assert!(matches.iter().any(|m| m.category == Category::Temple));
        assert!(!matches.iter().any(|m| m.category == Category::Country));
    }

    #[test]
    fn test_zero_matches_for_unknown_term() {
        let matches = search("zzzzz", &test_catalog());
        assert!(matches.is_empty());
    }

    #[test]
    fn test_backfill_skips_duplicates_by_id() {
        // One beach matches the query by name; backfill must not add it again.
        let mut surf = Destination::named("Beachcomber Cove");
        surf.id = Some("cove".to_string());
        let mut other = Destination::named("Quiet Sands");
        other.id = Some("sands".to_string());

        let catalog = Catalog {
            beaches: vec![surf, other],
            ..Catalog::default()
        };

        let matches = search("beach", &catalog);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].destination.name, "Beachcomber Cove");
        assert_eq!(matches[1].destination.name, "Quiet Sands");
    }

    #[test]
    fn test_backfill_dedup_without_ids_uses_value_equality() {
        let catalog = Catalog {
            temples: vec![
                Destination::named("Temple of Heaven"),
                Destination::named("Temple of Heaven"),
            ],
            ..Catalog::default()
        };

        // Both entries are equal values; the inclusion pass already matched
        // both, so backfill must add nothing further.
        let matches = search("temple", &catalog);
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_outcome_empty_query() {
        let catalog = test_catalog();
        assert_eq!(
            SearchOutcome::run("   ", Some(&catalog)),
            SearchOutcome::EmptyQuery
        );
    }

    #[test]
    fn test_outcome_not_loaded() {
        assert_eq!(SearchOutcome::run("beach", None), SearchOutcome::NotLoaded);
    }

    #[test]
    fn test_outcome_no_results() {
        let catalog = test_catalog();
        assert_eq!(
            SearchOutcome::run("zzzzz", Some(&catalog)),
            SearchOutcome::NoResults
        );
    }

    #[test]
    fn test_outcome_normalizes_raw_input() {
        let catalog = test_catalog();
        let SearchOutcome::Results(matches) = SearchOutcome::run("  ANGKOR  ", Some(&catalog))
        else {
            panic!("expected results");
        };
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].destination.name, "Angkor Wat");
    }
}
