//! HTTP service exposing CRUD operations over a collection of assets.
//!
//! # Overview
//! A single resource path, `/api/assets`, dispatches by method:
//!
//! - `GET` lists every asset ordered by name
//! - `POST` creates (or replaces) an asset keyed by its URI
//! - `PUT` attaches a note to an existing asset
//! - `DELETE` removes an existing asset
//!
//! Any other method answers `405 Method Not Allowed`.
//!
//! # Design
//! The backing store is injected into [`app`] as an `Arc<dyn AssetStore>`,
//! so handlers never reach for process-global state and tests can swap in
//! [`MemoryStore`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod store;
pub mod telemetry;
pub mod validate;

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use model::{Asset, AssetPayload};
pub use store::{AssetStore, DocumentStore, MemoryStore, StoreError};

/// Path under which the asset collection is served.
pub const ASSETS_PATH: &str = "/api/assets";

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AssetStore>,
}

pub fn app(store: Arc<dyn AssetStore>) -> Router {
    Router::new()
        .route(
            ASSETS_PATH,
            get(handlers::list_assets)
                .post(handlers::create_asset)
                .put(handlers::update_asset)
                .delete(handlers::remove_asset)
                // `get` would otherwise answer HEAD with the listing.
                .head(handlers::method_not_allowed)
                .fallback(handlers::method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { store })
}

pub async fn run(listener: TcpListener, store: Arc<dyn AssetStore>) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}
