//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation (layers, static files)
//! └── api_routes.rs   - API endpoint registration
//! ```
//!
//! # Route Organization
//!
//! 1. **API Routes** - everything under `/api`
//! 2. **Uploaded Photos** - `/uploads/*` served straight from disk
//! 3. **Fallback Handler** - 404 for everything else
//!
//! # Route Types
//!
//! ## Account Routes
//!
//! - `POST /api/register` - User registration
//! - `POST /api/login` - User login
//! - `POST /api/logout` - Clear the session cookie
//! - `GET /api/profile` - Current user (or `null` when anonymous)
//! - `PUT /api/profile` - Update name, email or password
//!
//! ## Place Routes
//!
//! - `POST /api/places` - Create a listing
//! - `PUT /api/places` - Update an owned listing
//! - `GET /api/places` - Browse all listings
//! - `GET /api/places/{id}` - Single listing
//! - `GET /api/user-places` - Listings owned by the signed-in user
//!
//! ## Booking Routes
//!
//! - `POST /api/bookings` - Book a place
//! - `GET /api/bookings` - Bookings made by the signed-in user
//! - `GET /api/bookings/{id}` - Single booking with its place expanded
//!
//! ## Upload Routes
//!
//! - `POST /api/upload` - Multipart photo upload
//! - `POST /api/upload-by-link` - Fetch a photo from a URL
//!
//! ## Service Routes
//!
//! - `GET /api/health` - Liveness probe

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
