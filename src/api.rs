//! HTTP API for the search widget: search, reset, and catalog diagnostics.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::debug;

use crate::loader::{CatalogLoader, CatalogSource, LoadedCatalog};
use crate::render;
use crate::search::SearchOutcome;
use crate::timezone::TimezoneTable;

/// Shared application state.
///
/// The catalog cell is written exactly once, when the startup load resolves;
/// request handlers only read it. The timezone table is immutable from
/// construction, so no locking is needed anywhere.
pub struct AppState {
    catalog: OnceCell<LoadedCatalog>,
    timezones: TimezoneTable,
}

impl AppState {
    /// Create state with an empty catalog cell
    #[must_use]
    pub fn new(timezones: TimezoneTable) -> Arc<Self> {
        Arc::new(Self {
            catalog: OnceCell::new(),
            timezones,
        })
    }

    /// Run the catalog load and publish the result.
    ///
    /// Repeated calls keep the first published value.
    pub async fn load_catalog(&self, loader: &CatalogLoader) {
        let loaded = loader.load().await;
        if self.catalog.set(loaded).is_err() {
            debug!("Catalog already loaded, keeping the first result");
        }
    }

    /// Publish an already-built catalog (embedded use and tests)
    pub fn set_catalog(&self, loaded: LoadedCatalog) {
        if self.catalog.set(loaded).is_err() {
            debug!("Catalog already loaded, keeping the first result");
        }
    }

    /// The loaded catalog, if the load has completed
    #[must_use]
    pub fn loaded(&self) -> Option<&LoadedCatalog> {
        self.catalog.get()
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Raw query text from the search input
    #[serde(default)]
    pub q: String,
}

/// Envelope returned by the search endpoint
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// One of: results, empty_query, no_results, loading
    pub status: &'static str,
    /// Rendered fragment for the results region
    pub html: String,
    /// Number of cards in `html`
    pub count: usize,
}

/// Envelope returned by the reset endpoint
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub status: &'static str,
    /// Replacement content for the results region (empty on reset)
    pub html: String,
    /// The page should clear the query input
    pub clear_input: bool,
    /// The page should scroll back to the top
    pub scroll_top: bool,
}

/// Catalog provenance report for diagnostics
#[derive(Debug, Serialize)]
pub struct CatalogReport {
    pub loaded: bool,
    pub source: Option<CatalogSource>,
    pub beaches: usize,
    pub temples: usize,
    pub countries: usize,
}

impl From<Option<&LoadedCatalog>> for CatalogReport {
    fn from(loaded: Option<&LoadedCatalog>) -> Self {
        match loaded {
            Some(loaded) => Self {
                loaded: true,
                source: Some(loaded.source),
                beaches: loaded.catalog.beaches.len(),
                temples: loaded.catalog.temples.len(),
                countries: loaded.catalog.countries.len(),
            },
            None => Self {
                loaded: false,
                source: None,
                beaches: 0,
                temples: 0,
                countries: 0,
            },
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/search", get(search_handler))
        .route("/reset", get(reset_handler))
        .route("/catalog", get(catalog_handler))
        .with_state(state)
}

async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, StatusCode> {
    let catalog = state.loaded().map(|loaded| &loaded.catalog);
    let now = Utc::now();

    let response = match SearchOutcome::run(&params.q, catalog) {
        SearchOutcome::Results(matches) => SearchResponse {
            status: "results",
            count: matches.len(),
            html: render::render_results(&matches, &state.timezones, now)
                .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?,
        },
        SearchOutcome::EmptyQuery => SearchResponse {
            status: "empty_query",
            count: 0,
            html: render::render_prompt().map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?,
        },
        SearchOutcome::NoResults => SearchResponse {
            status: "no_results",
            count: 0,
            html: render::render_no_results(params.q.trim())
                .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?,
        },
        SearchOutcome::NotLoaded => SearchResponse {
            status: "loading",
            count: 0,
            html: render::render_loading().map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?,
        },
    };

    Ok(Json(response))
}

/// Clear the results region. Catalog and timezone table are untouched; the
/// input-clearing and scroll directives are applied by the page.
async fn reset_handler() -> Json<ResetResponse> {
    Json(ResetResponse {
        status: "reset",
        html: String::new(),
        clear_input: true,
        scroll_top: true,
    })
}

async fn catalog_handler(State(state): State<Arc<AppState>>) -> Json<CatalogReport> {
    Json(CatalogReport::from(state.loaded()))
}
