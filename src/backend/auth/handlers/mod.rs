//! Account HTTP Handlers
//!
//! One handler file per operation for maintainability.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── register.rs - Account creation handler
//! ├── login.rs    - Credential check + session cookie handler
//! ├── logout.rs   - Session cookie removal handler
//! └── profile.rs  - Profile read/update handlers
//! ```
//!
//! # Handlers
//!
//! - **`register`**       - POST /api/register
//! - **`login`**          - POST /api/login
//! - **`logout`**         - POST /api/logout
//! - **`get_profile`**    - GET /api/profile
//! - **`update_profile`** - PUT /api/profile

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Profile read/update handlers
pub mod profile;

// Re-export handlers
pub use login::login;
pub use logout::logout;
pub use profile::{get_profile, update_profile};
pub use register::register;

use crate::backend::auth::users::UserRecord;
use crate::shared::users::User;

/// Shape a stored record for the wire; the credential hash stays behind
pub(crate) fn public_user(record: UserRecord) -> User {
    User {
        id: record.id,
        name: record.name,
        email: record.email,
    }
}
