/**
 * Client-Side Session State
 *
 * Mirrors the browser client's user context: the cached user document and a
 * readiness flag. `ready` stays false until the first profile probe answers,
 * so callers can tell "not signed in" apart from "haven't asked yet".
 */
use crate::shared::users::User;

use super::api::{ApiClient, ClientError};

/// Session state
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub user: Option<User>,
    pub ready: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the server who we are. Flips `ready` even when the answer is
    /// "nobody"; a transport failure leaves it unset so the caller can retry.
    pub async fn refresh(&mut self, client: &ApiClient) -> Result<(), ClientError> {
        self.user = client.profile().await?;
        self.ready = true;
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Forget the cached user, e.g. after logout
    pub fn clear(&mut self) {
        self.user = None;
    }
}
