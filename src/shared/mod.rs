//! Shared Module
//!
//! Wire-format types exchanged between the booking backend and its clients.
//! Documents serialize the way the HTTP API speaks: `_id` for identifiers and
//! camelCase member names, so the same structs serve both the server handlers
//! and the client library.

/// Account and profile types
pub mod users;

/// Rental listing types
pub mod places;

/// Booking types
pub mod bookings;

/// Photo upload types
pub mod uploads;

/// Re-export commonly used types for convenience
pub use users::{LoginRequest, ProfileUpdate, RegisterRequest, UpdateProfileRequest, User};
pub use places::{Place, PlaceData, UpdatePlaceRequest};
pub use bookings::{Booking, BookingWithPlace, NewBooking};
pub use uploads::{UploadByLinkRequest, UploadResponse};
