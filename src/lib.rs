//! StayBook - Main Library
//!
//! StayBook is a property-rental booking service built with Rust: an Axum
//! REST backend over MongoDB, signed-cookie sessions, photo uploads, and a
//! typed HTTP client for driving the API from Rust programs and tests.
//!
//! # Overview
//!
//! This library provides the core functionality for StayBook, including:
//! - Account registration, login and profile management
//! - Place listings with photos, perks and pricing
//! - Bookings that expand their place inline
//! - Photo uploads, both multipart and fetched from a URL
//! - JWT session tokens carried in an HTTP-only cookie
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Types shared between client and backend
//!   - User, place and booking documents as they appear on the wire
//!   - Request payloads and response envelopes
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server with the `/api` routes
//!   - MongoDB-backed stores behind trait objects
//!   - Session signing, authorization extractor, photo storage
//!
//! - **`client`** - Typed HTTP client for the API
//!   - One method per endpoint
//!   - Session cookie capture and replay
//!   - Session restore on connect
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! use staybook::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env();
//! let (app, store_client) = create_app(&config).await?;
//! // Serve `app` with Axum, then `store_client.shutdown().await`
//! # Ok(())
//! # }
//! ```
//!
//! ## Client-Side
//!
//! ```rust,no_run
//! use staybook::client::ApiClient;
//!
//! # async fn example() -> Result<(), staybook::client::ClientError> {
//! let mut client = ApiClient::connect("http://localhost:5002")?;
//! let profile = client.login("user@example.com", "secret").await?;
//! let places = client.places().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! The library uses Rust's standard error handling:
//!
//! - `Result<T, E>` for fallible operations
//! - `ApiError` on the server, mapped to HTTP status codes
//! - `ClientError` on the client, separating transport failures from
//!   API-level rejections

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;

/// Typed HTTP client for the API
pub mod client;
