//! Authentication Module
//!
//! Account registration, login, profile management and session handling.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - Credential store (user records)
//! ├── sessions.rs     - JWT session tokens
//! ├── cookies.rs      - Session cookie handling
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── register.rs - Account creation
//!     ├── login.rs    - Credential check + cookie issue
//!     ├── logout.rs   - Cookie removal
//!     └── profile.rs  - Profile read/update
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name/email/password → bcrypt hash stored → user returned
//! 2. **Login**: credentials verified → signed token set as HTTP-only cookie
//! 3. **Profile**: cookie verified → user document returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never serialized
//! - Session tokens are stateless JWTs; validity alone establishes identity
//! - Invalid credentials answer 401 without revealing which field was wrong

/// Credential store: user records and their persistence
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// Session cookie building and parsing
pub mod cookies;

/// HTTP handlers for account endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use sessions::{SessionInvalid, SessionSigner, SessionUser};
pub use users::{MongoUserStore, NewUser, ProfilePatch, UserRecord, UserStore};
