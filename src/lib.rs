//! `Tripscout` - Destination catalog search for the travel recommendation page
//!
//! This library provides the core functionality for catalog loading,
//! keyword and category search, and result card rendering with local times.

pub mod api;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod render;
pub mod search;
pub mod timezone;
pub mod web;

// Re-export core types for public API
pub use config::TripscoutConfig;
pub use error::TripscoutError;
pub use loader::{CatalogLoader, CatalogSource, FallbackReason, LoadedCatalog};
pub use models::{Catalog, Category, Destination};
pub use search::{Match, SearchOutcome, prepare_query, search};
pub use timezone::TimezoneTable;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripscoutError>;
