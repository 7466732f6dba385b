//! `Tripscout` server entrypoint

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tripscout::api::AppState;
use tripscout::config::TripscoutConfig;
use tripscout::loader::CatalogLoader;
use tripscout::timezone::TimezoneTable;
use tripscout::web;

#[tokio::main]
async fn main() -> Result<()> {
    let config = TripscoutConfig::load()?;
    init_tracing(&config);

    info!("tripscout {} starting", tripscout::VERSION);

    let state = AppState::new(TimezoneTable::builtin());
    let loader = CatalogLoader::new(&config.catalog);

    // Publish the catalog as soon as the load resolves; searches that arrive
    // earlier get the loading state.
    let load_state = state.clone();
    tokio::spawn(async move {
        load_state.load_catalog(&loader).await;
    });

    web::run(state, config.server.port, &config.server.static_dir).await
}

fn init_tracing(config: &TripscoutConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
