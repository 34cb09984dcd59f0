/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * Routes are added in a specific order to ensure proper matching:
 * 1. API routes (everything under `/api`)
 * 2. Uploaded photo files (`/uploads/*`, served from disk)
 * 3. Fallback handler (404)
 *
 * # Layers
 *
 * The router is wrapped in request tracing, credentialed CORS for the
 * browser client, and a body limit sized for photo uploads.
 */
use axum::{
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Request bodies above this size are rejected before reaching a handler.
/// Photo uploads are the only large payloads the API accepts.
const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `state` - Application state containing stores, signer and photo storage
/// * `client_origin` - Exact origin the browser client is served from
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(state: AppState, client_origin: &str) -> Router<()> {
    let uploads_dir = state.storage.dir().to_path_buf();

    let router = configure_api_routes(Router::new());

    // Uploaded photos are public once stored
    let router = router.nest_service("/uploads", ServeDir::new(uploads_dir));

    // Fallback handler for 404
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    router
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors_layer(client_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Credentialed CORS for the browser client
///
/// The session cookie only travels cross-origin when the exact origin is
/// echoed back, so a wildcard is not an option here.
fn cors_layer(client_origin: &str) -> CorsLayer {
    let origin = match client_origin.parse::<HeaderValue>() {
        Ok(value) => AllowOrigin::exact(value),
        Err(_) => {
            tracing::warn!(
                "invalid client origin {:?}, cross-origin requests will be refused",
                client_origin
            );
            AllowOrigin::default()
        }
    };
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}
