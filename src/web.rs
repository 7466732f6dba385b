use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;

use crate::api::{self, AppState};

/// Deadline for any single request, including the search pipeline
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the full application router: the API plus the static page
pub fn app(state: Arc<AppState>, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api::router(state))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
}

pub async fn run(state: Arc<AppState>, port: u16, static_dir: &str) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Web server running at http://localhost:{port}");
    axum::serve(listener, app(state, static_dir)).await?;
    Ok(())
}
