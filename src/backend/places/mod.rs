//! Places Module
//!
//! Rental listings: creation, owner-checked updates, and public reads.

pub mod handlers;
pub mod store;

pub use store::{MongoPlaceStore, PlaceStore};
