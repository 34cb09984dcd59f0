/**
 * API Route Handlers
 *
 * This module registers every `/api` endpoint on the router:
 * - Account endpoints (register, login, logout, profile)
 * - Place endpoints (create, update, browse, owned listings)
 * - Booking endpoints (create, list, single booking)
 * - Upload endpoints (multipart and by-link)
 * - Health probe
 *
 * # Authentication
 *
 * Routes taking an [`AuthUser`](crate::backend::middleware::AuthUser)
 * argument require a valid session cookie; the rest are public. The profile
 * GET is a special case: it reads the cookie itself so an anonymous request
 * answers `200 null` instead of 401.
 */
use axum::{
    routing::{get, post, put},
    Json, Router,
};

use crate::backend::auth::handlers::{get_profile, login, logout, register, update_profile};
use crate::backend::bookings::handlers::{create_booking, get_booking, list_bookings};
use crate::backend::places::handlers::{
    create_place, get_place, list_places, list_user_places, update_place,
};
use crate::backend::server::state::AppState;
use crate::backend::uploads::handlers::{upload_by_link, upload_photos};

/// Liveness probe, answered without touching the store
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with all `/api` routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Service endpoints
        .route("/api/health", get(health))
        // Account endpoints
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/logout", post(logout))
        .route("/api/profile", get(get_profile).put(update_profile))
        // Place endpoints
        .route(
            "/api/places",
            post(create_place).put(update_place).get(list_places),
        )
        .route("/api/places/{id}", get(get_place))
        .route("/api/user-places", get(list_user_places))
        // Booking endpoints
        .route("/api/bookings", post(create_booking).get(list_bookings))
        .route("/api/bookings/{id}", get(get_booking))
        // Upload endpoints
        .route("/api/upload", post(upload_photos))
        .route("/api/upload-by-link", post(upload_by_link))
}
