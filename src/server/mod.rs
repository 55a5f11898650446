//! Read endpoint for the harvested dataset
//!
//! Exposes a single `GET /scraped_data` route returning the persisted
//! dataset as a JSON array. The server only reads; it never triggers a crawl.

mod routes;

pub use routes::{scraped_data_handler, SCRAPED_DATA_PATH};

use crate::config::ServerConfig;
use crate::dataset::DatasetStore;
use crate::HarvestError;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DatasetStore>,
}

/// Builds the application router
pub fn build_router(store: Arc<dyn DatasetStore>) -> Router {
    Router::new()
        .route(SCRAPED_DATA_PATH, get(scraped_data_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { store })
}

/// Binds the configured address and serves until the process exits
pub async fn serve(config: &ServerConfig, store: Arc<dyn DatasetStore>) -> Result<(), HarvestError> {
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!(
        "Serving dataset on http://{}{}",
        listener.local_addr()?,
        SCRAPED_DATA_PATH
    );

    axum::serve(listener, build_router(store)).await?;
    Ok(())
}
