//! Backend Module
//!
//! This module contains all server-side code for the StayBook application.
//! It provides a complete Axum HTTP server backing the booking client:
//! account management, place listings, bookings and photo uploads.
//!
//! # Overview
//!
//! The backend module includes:
//! - Axum HTTP server setup and configuration
//! - Account registration, login and profile management
//! - Place listing CRUD with per-owner authorization
//! - Booking creation and retrieval
//! - Photo uploads (multipart and fetch-by-link) served back as static files
//! - Document database persistence (MongoDB)
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Authentication, JWT session cookies, user management
//! - **`places`** - Place listings and their persistence
//! - **`bookings`** - Bookings and their persistence
//! - **`uploads`** - Photo storage on disk
//! - **`middleware`** - Request authorization extractor
//! - **`db`** - Store connection, timeouts and error classification
//! - **`error`** - API error types and HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication and accounts
//! ├── places/         - Place listings
//! ├── bookings/       - Bookings
//! ├── uploads/        - Photo storage
//! ├── middleware/     - Request authorization
//! ├── db.rs           - Store plumbing
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! The backend uses shared state (`AppState`) that contains:
//! - Store handles behind trait objects (`Arc<dyn UserStore>` and friends)
//! - The session token signer
//! - The photo storage root
//!
//! Store handles are cheap to clone and internally thread-safe; handlers
//! never hold locks across await points because there are none to hold.
//!
//! # Error Handling
//!
//! The backend uses standard HTTP status codes and custom error types:
//! - `ApiError` for everything a handler can answer
//! - `StoreError` for store-level failures, converted at the handler boundary
//! - Proper error propagation with `?` operator

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Place listings
pub mod places;

/// Bookings
pub mod bookings;

/// Photo upload storage
pub mod uploads;

/// Middleware for request processing
pub mod middleware;

/// Store connection and error classification
pub mod db;

/// Re-export commonly used types
pub use error::ApiError;
pub use server::create_app;
