//! Middleware Module
//!
//! Request-level checks that run before handlers.
//!
//! - **`auth`** - the authorization gate: session-cookie verification and
//!   the `AuthUser` extractor protected routes take as an argument

pub mod auth;

pub use auth::{authorize, AuthUser};
