/**
 * Server Initialization
 *
 * Builds the application from configuration: store connection, indexes,
 * injected state, router. Unlike the stores behind it, initialization is
 * strict; a store that cannot be reached at startup fails the boot instead
 * of limping along. The mongo client is returned alongside the router so
 * the caller can close it on shutdown.
 */

use axum::Router;
use std::sync::Arc;
use thiserror::Error;

use crate::backend::auth::sessions::SessionSigner;
use crate::backend::auth::users::MongoUserStore;
use crate::backend::bookings::store::MongoBookingStore;
use crate::backend::db::{self, StoreError};
use crate::backend::places::store::MongoPlaceStore;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::{AppState, Stores};
use crate::backend::uploads::storage::PhotoStorage;

/// Failures that stop the server from coming up
#[derive(Debug, Error)]
pub enum InitError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("could not prepare uploads directory: {0}")]
    Uploads(#[from] std::io::Error),
}

/// Create and configure the application
///
/// # Initialization Steps
///
/// 1. Connect the document store and verify it answers a ping
/// 2. Build the store clients and ensure the unique email index
/// 3. Prepare the uploads directory
/// 4. Build the session signer from the configured secret
/// 5. Assemble state and the router
pub async fn create_app(config: &ServerConfig) -> Result<(Router, mongodb::Client), InitError> {
    tracing::info!("Initializing booking backend server");

    let client = db::connect(&config.store_uri, config.store_timeout).await?;
    let database = client.database(&config.database);
    tracing::info!("Connected to document store, database '{}'", config.database);

    let users = MongoUserStore::new(&database, config.store_timeout);
    users.ensure_indexes().await?;
    let stores = Stores {
        users: Arc::new(users),
        places: Arc::new(MongoPlaceStore::new(&database, config.store_timeout)),
        bookings: Arc::new(MongoBookingStore::new(&database, config.store_timeout)),
    };
    tracing::info!("Store clients ready, unique email index ensured");

    let storage = PhotoStorage::create(&config.uploads_dir)?;
    tracing::info!("Uploads directory ready at {}", config.uploads_dir.display());

    let signer = SessionSigner::new(config.jwt_secret.clone(), config.session_ttl_days);

    let state = AppState {
        stores,
        signer,
        storage,
    };

    let app = create_router(state, &config.client_origin);
    tracing::info!("Router configured");

    Ok((app, client))
}
