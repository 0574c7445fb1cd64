use std::path::Path;

use axum::{Router, http::Uri, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    services::ServeDir,
};

use crate::{error::AppError, state::AppState};

pub mod admin;
pub mod auth;
pub mod builds;
pub mod doc;
pub mod health;
pub mod orders;
pub mod params;
pub mod products;

pub const BODY_LIMIT_BYTES: usize = 1024 * 1024;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .merge(auth::router())
        .merge(builds::router())
        .nest("/orders", orders::router())
        .nest("/admin", admin::router())
}

/// Full application: health, `/api`, docs, and either the storefront's static
/// files or a JSON 404 for everything else.
pub fn create_app(state: AppState, static_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs());

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router.fallback(not_found),
    };

    router
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "no route");
    AppError::NotFound
}
