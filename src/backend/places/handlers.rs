//! HTTP handlers for rental listings
//!
//! Creation and owner-scoped reads require a session; single-place reads
//! and the listing index are public. The `owner` field always comes from
//! the verified session, never from a request body.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::backend::error::ApiError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::state::Stores;
use crate::shared::places::{Place, PlaceData, UpdatePlaceRequest};

/// POST /api/places — create a listing owned by the session user
pub async fn create_place(
    State(stores): State<Stores>,
    AuthUser(user): AuthUser,
    Json(data): Json<PlaceData>,
) -> Result<(StatusCode, Json<Place>), ApiError> {
    let place = stores.places.create(&user.id, data).await?;
    tracing::info!("user {} created place {}", user.id, place.id);
    Ok((StatusCode::CREATED, Json(place)))
}

/// PUT /api/places — replace a listing's fields, owners only
pub async fn update_place(
    State(stores): State<Stores>,
    AuthUser(user): AuthUser,
    Json(request): Json<UpdatePlaceRequest>,
) -> Result<Json<Place>, ApiError> {
    let existing = stores
        .places
        .find_by_id(&request.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Place"))?;

    if existing.owner != user.id {
        tracing::warn!(
            "user {} tried to update place {} owned by {}",
            user.id,
            existing.id,
            existing.owner
        );
        return Err(ApiError::Forbidden);
    }

    let updated = stores
        .places
        .update(&request.id, request.data)
        .await?
        .ok_or_else(|| ApiError::not_found("Place"))?;

    Ok(Json(updated))
}

/// GET /api/places/{id} — public single-listing read
pub async fn get_place(
    State(stores): State<Stores>,
    Path(id): Path<String>,
) -> Result<Json<Place>, ApiError> {
    let place = stores
        .places
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Place"))?;
    Ok(Json(place))
}

/// GET /api/user-places — listings owned by the session user
pub async fn list_user_places(
    State(stores): State<Stores>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Place>>, ApiError> {
    let places = stores.places.list_by_owner(&user.id).await?;
    Ok(Json(places))
}

/// GET /api/places — public index of all listings
pub async fn list_places(State(stores): State<Stores>) -> Result<Json<Vec<Place>>, ApiError> {
    let places = stores.places.list_all().await?;
    Ok(Json(places))
}
