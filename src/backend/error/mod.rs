//! Backend Error Module
//!
//! Error types for the HTTP handlers and their conversion to responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! Every failure a handler can produce is an [`ApiError`] variant with a
//! fixed HTTP status and a client-safe message. `ApiError` implements
//! `IntoResponse`, so handlers return `Result<_, ApiError>` and the error
//! renders as a `{"message": "..."}` JSON body. Store and session failures
//! convert via `From`, which keeps driver detail out of responses.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
