//! HTTP handlers for bookings
//!
//! All three endpoints require a session. The booking's `user` field is
//! fixed from the verified session at creation, and reads only ever return
//! bookings belonging to the caller. Read responses carry the referenced
//! place expanded into a full document.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::backend::error::ApiError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::state::Stores;
use crate::shared::bookings::{Booking, BookingWithPlace, NewBooking};

async fn expand(stores: &Stores, booking: Booking) -> Result<BookingWithPlace, ApiError> {
    let place = stores.places.find_by_id(&booking.place).await?;
    Ok(BookingWithPlace::expand(booking, place))
}

/// POST /api/bookings — record a booking for the session user
///
/// Deliberately does not verify that the referenced place exists or that
/// the dates are free; writes are independent, like every other endpoint.
pub async fn create_booking(
    State(stores): State<Stores>,
    AuthUser(user): AuthUser,
    Json(new_booking): Json<NewBooking>,
) -> Result<(StatusCode, Json<Booking>), ApiError> {
    let booking = stores.bookings.create(&user.id, new_booking).await?;
    tracing::info!("user {} booked place {}", user.id, booking.place);
    Ok((StatusCode::CREATED, Json(booking)))
}

/// GET /api/bookings — the session user's bookings, places expanded
pub async fn list_bookings(
    State(stores): State<Stores>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<BookingWithPlace>>, ApiError> {
    let bookings = stores.bookings.list_for_user(&user.id).await?;

    let mut expanded = Vec::with_capacity(bookings.len());
    for booking in bookings {
        expanded.push(expand(&stores, booking).await?);
    }

    Ok(Json(expanded))
}

/// GET /api/bookings/{id} — single booking, owners only
pub async fn get_booking(
    State(stores): State<Stores>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<BookingWithPlace>, ApiError> {
    let booking = stores
        .bookings
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("Booking"))?;

    if booking.user != user.id {
        tracing::warn!("user {} requested booking {} made by {}", user.id, booking.id, booking.user);
        return Err(ApiError::Forbidden);
    }

    Ok(Json(expand(&stores, booking).await?))
}
