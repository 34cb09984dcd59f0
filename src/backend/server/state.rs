/**
 * Application State Management
 *
 * `AppState` carries every injected dependency: the three store clients,
 * the session signer, and photo storage. Construction happens once at
 * startup; handlers extract the piece they need through the `FromRef`
 * implementations, which keeps their signatures honest about what they
 * touch. Nothing reaches stores through globals.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::sessions::SessionSigner;
use crate::backend::auth::users::UserStore;
use crate::backend::bookings::store::BookingStore;
use crate::backend::places::store::PlaceStore;
use crate::backend::uploads::storage::PhotoStorage;

/// Store clients behind the resource endpoints
///
/// Held as trait objects so tests can swap in in-memory implementations
/// with the same contracts.
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub places: Arc<dyn PlaceStore>,
    pub bookings: Arc<dyn BookingStore>,
}

/// Central state container handed to the router
#[derive(Clone)]
pub struct AppState {
    /// Injected store clients
    pub stores: Stores,
    /// Session token issuer/verifier
    pub signer: SessionSigner,
    /// Where uploaded photos land
    pub storage: PhotoStorage,
}

/// Allow handlers to take `State<Stores>` when they only touch stores
impl FromRef<AppState> for Stores {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.stores.clone()
    }
}

/// Allow handlers to take `State<SessionSigner>` directly
impl FromRef<AppState> for SessionSigner {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.signer.clone()
    }
}

/// Allow the upload handlers to take `State<PhotoStorage>` directly
impl FromRef<AppState> for PhotoStorage {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.storage.clone()
    }
}
