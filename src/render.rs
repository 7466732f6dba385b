//! Result card rendering.
//!
//! All catalog text passes through askama's HTML escaping on its way into a
//! fragment; nothing from the catalog may reach the page as structural
//! markup. That escaping is a hard contract and has its own tests below.

use askama::Template;
use chrono::{DateTime, Utc};

use crate::Result;
use crate::TripscoutError;
use crate::search::Match;
use crate::timezone::{TimezoneTable, local_time_label};

/// Image used when a catalog entry has none of its own
const PLACEHOLDER_IMAGE: &str = "/img/placeholder.jpg";

#[derive(Template)]
#[template(path = "card.html")]
struct CardTemplate<'a> {
    category: &'a str,
    title: &'a str,
    image_url: &'a str,
    blurb: &'a str,
    local_time: String,
    zone_id: &'a str,
}

#[derive(Template)]
#[template(path = "results.html")]
struct ResultsTemplate {
    /// Pre-rendered, already-escaped card markup
    body: String,
}

#[derive(Template)]
#[template(path = "status.html")]
struct StatusTemplate<'a> {
    headline: &'a str,
    detail: &'a str,
}

/// Render one result card with its resolved local time
pub fn render_card(entry: &Match, timezones: &TimezoneTable, now: DateTime<Utc>) -> Result<String> {
    let zone_id = timezones.resolve(&entry.destination);
    let card = CardTemplate {
        category: entry.category.label(),
        title: entry.destination.display_title(),
        image_url: entry
            .destination
            .image_url
            .as_deref()
            .unwrap_or(PLACEHOLDER_IMAGE),
        blurb: entry.destination.blurb(),
        local_time: local_time_label(zone_id, now),
        zone_id,
    };

    card.render()
        .map_err(|e| TripscoutError::render(e.to_string()))
}

/// Render the full results region for a set of matches
pub fn render_results(
    matches: &[Match],
    timezones: &TimezoneTable,
    now: DateTime<Utc>,
) -> Result<String> {
    let mut body = String::new();
    for entry in matches {
        body.push_str(&render_card(entry, timezones, now)?);
        body.push('\n');
    }

    ResultsTemplate { body }
        .render()
        .map_err(|e| TripscoutError::render(e.to_string()))
}

/// Fragment asking the user to type a keyword (empty-query state)
pub fn render_prompt() -> Result<String> {
    render_status(
        "Type a keyword to search",
        "Try \"beach\", \"temple\", \"country\" or a destination name.",
    )
}

/// Fragment explaining that nothing in the catalog matched
pub fn render_no_results(query: &str) -> Result<String> {
    render_status(
        "No destinations found",
        &format!("Nothing matches \"{query}\". Try a broader keyword like \"beach\" or \"temple\"."),
    )
}

/// Fragment shown when a search arrives before the catalog finished loading
pub fn render_loading() -> Result<String> {
    render_status(
        "Still loading destinations",
        "The catalog is on its way. Try again in a moment.",
    )
}

fn render_status(headline: &str, detail: &str) -> Result<String> {
    StatusTemplate { headline, detail }
        .render()
        .map_err(|e| TripscoutError::render(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Destination};
    use chrono::TimeZone;

    fn noon_utc() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
            .single()
            .expect("valid time")
    }

    fn entry(destination: Destination) -> Match {
        Match {
            category: Category::Temple,
            destination,
        }
    }

    #[test]
    fn test_card_shows_title_blurb_and_local_time() {
        let mut destination = Destination::named("Angkor Wat");
        destination.country = Some("Cambodia".to_string());
        destination.description = Some("Vast temple complex.".to_string());

        let html = render_card(&entry(destination), &TimezoneTable::builtin(), noon_utc())
            .expect("card renders");

        assert!(html.contains("Angkor Wat"));
        assert!(html.contains("Vast temple complex."));
        // Phnom Penh is UTC+7.
        assert!(html.contains("19:00"));
        assert!(html.contains("Asia/Phnom_Penh"));
    }

    #[test]
    fn test_card_uses_placeholder_image_when_entry_has_none() {
        let html = render_card(
            &entry(Destination::named("Angkor Wat")),
            &TimezoneTable::builtin(),
            noon_utc(),
        )
        .expect("card renders");

        assert!(html.contains(PLACEHOLDER_IMAGE));
    }

    #[test]
    fn test_markup_in_description_is_escaped() {
        let mut destination = Destination::named("Evil Temple");
        destination.description = Some("<script>alert('x')</script>".to_string());

        let html = render_card(&entry(destination), &TimezoneTable::builtin(), noon_utc())
            .expect("card renders");

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_quotes_in_title_cannot_break_out_of_attributes() {
        let mut destination = Destination::named(r#"Cove" onmouseover="steal()"#);
        destination.image_url = Some("/img/cove.jpg".to_string());

        let html = render_card(&entry(destination), &TimezoneTable::builtin(), noon_utc())
            .expect("card renders");

        assert!(!html.contains(r#"Cove" onmouseover"#));
    }

    #[test]
    fn test_ampersand_is_escaped() {
        let mut destination = Destination::named("Sand & Surf");
        destination.description = Some("Dunes & dives.".to_string());

        let html = render_card(&entry(destination), &TimezoneTable::builtin(), noon_utc())
            .expect("card renders");

        assert!(html.contains("Sand &amp; Surf"));
        assert!(html.contains("Dunes &amp; dives."));
    }

    #[test]
    fn test_results_fragment_contains_one_card_per_match() {
        let matches = vec![
            entry(Destination::named("Angkor Wat")),
            entry(Destination::named("Kinkaku-ji")),
        ];

        let html = render_results(&matches, &TimezoneTable::builtin(), noon_utc())
            .expect("results render");

        assert_eq!(html.matches("destination-card-title").count(), 2);
        assert!(html.contains("results-grid"));
    }

    #[test]
    fn test_no_results_fragment_escapes_the_query() {
        let html = render_no_results("<img src=x>").expect("status renders");
        assert!(!html.contains("<img src=x>"));
        assert!(html.contains("&lt;img src=x&gt;"));
    }

    #[test]
    fn test_state_fragments_render() {
        assert!(render_prompt().expect("prompt").contains("Type a keyword"));
        assert!(render_loading().expect("loading").contains("Still loading"));
    }
}
