//! Bookings Module
//!
//! Reservations against listings. Every operation is scoped to the session
//! user; read endpoints expand the referenced place document.

pub mod handlers;
pub mod store;

pub use store::{BookingStore, MongoBookingStore};
