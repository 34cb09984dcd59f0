//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Environment configuration
//! └── init.rs         - Store connection and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. `ServerConfig::from_env()` resolves all settings
//! 2. `create_app` connects the document store, ensures indexes, builds
//!    the injected `AppState`, and returns the configured router together
//!    with the store client for an explicit shutdown

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::ServerConfig;
pub use init::create_app;
pub use state::{AppState, Stores};
