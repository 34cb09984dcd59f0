//! API Client Module
//!
//! This module provides a typed HTTP client for the StayBook API, used by
//! Rust programs and by the end-to-end test suite. It mirrors what the
//! browser client does: JSON requests, the session carried in a cookie,
//! and a profile probe on startup to restore an existing session.
//!
//! # Module Structure
//!
//! ```text
//! client/
//! ├── mod.rs      - Module exports and documentation
//! ├── api.rs      - ApiClient: one method per endpoint
//! └── session.rs  - Client-side session state
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use staybook::client::{ApiClient, Session};
//!
//! # async fn example() -> Result<(), staybook::client::ClientError> {
//! let mut client = ApiClient::connect("http://localhost:5002")?;
//! let mut session = Session::new();
//! session.refresh(&client).await?;
//!
//! if !session.is_authenticated() {
//!     let user = client.login("user@example.com", "secret").await?;
//!     session.user = Some(user);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod session;

// Re-export commonly used types
pub use api::{ApiClient, ClientError};
pub use session::Session;
