/**
 * Server Configuration
 *
 * Environment-driven settings, resolved once at startup into an explicit
 * value that gets passed around. Every knob has a development default so a
 * bare `cargo run` comes up against a local MongoDB; fallbacks that matter
 * in production log a warning.
 */

use std::path::PathBuf;
use std::time::Duration;

/// Runtime settings for the backend server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port the API listens on
    pub port: u16,
    /// MongoDB connection string
    pub store_uri: String,
    /// Database holding the users/places/bookings collections
    pub database: String,
    /// HS256 secret for session tokens
    pub jwt_secret: String,
    /// How long issued sessions stay valid
    pub session_ttl_days: u64,
    /// Origin allowed to make credentialed CORS requests
    pub client_origin: String,
    /// Directory uploaded photos are written to and served from
    pub uploads_dir: PathBuf,
    /// Upper bound for any single store operation
    pub store_timeout: Duration,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(5002);

        let store_uri = std::env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let database =
            std::env::var("MONGODB_DATABASE").unwrap_or_else(|_| "staybook".to_string());

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using a development-only secret");
            "your-secret-key-change-in-production".to_string()
        });

        let session_ttl_days = std::env::var("SESSION_TTL_DAYS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(30);

        let client_origin =
            std::env::var("CLIENT_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string());

        let uploads_dir = std::env::var("UPLOADS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("uploads"));

        let store_timeout_secs = std::env::var("STORE_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(10);

        Self {
            port,
            store_uri,
            database,
            jwt_secret,
            session_ttl_days,
            client_origin,
            uploads_dir,
            store_timeout: Duration::from_secs(store_timeout_secs),
        }
    }
}
