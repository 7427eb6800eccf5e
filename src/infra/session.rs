//! Client-side sign-in kept under the `user` key. Nothing is verified:
//! whoever types an email is that user.

use time::OffsetDateTime;

use super::predictions::PredictionStore;
use super::storage::{KeyValueStore, StorageError};
use crate::domain::{unix_millis, User};

pub const USER_KEY: &str = "user";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub name: Option<String>,
    /// Generated from the clock when absent.
    pub id: Option<String>,
}

/// `user_<milliseconds since epoch>`.
pub fn generate_user_id(at: OffsetDateTime) -> String {
    format!("user_{}", unix_millis(at))
}

#[derive(Debug)]
pub struct SessionManager<S> {
    backend: S,
}

impl<S: KeyValueStore> SessionManager<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn login(&mut self, request: LoginRequest) -> Result<User, StorageError> {
        self.login_at(request, OffsetDateTime::now_utc())
    }

    pub fn login_at(&mut self, request: LoginRequest, at: OffsetDateTime) -> Result<User, StorageError> {
        let id = request
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| generate_user_id(at));
        let name = request.name.filter(|name| !name.trim().is_empty());
        let user = User {
            id,
            email: request.email.trim().to_string(),
            name,
        };
        let json = serde_json::to_string(&user)?;
        self.backend.set(USER_KEY, &json)?;
        tracing::info!(uid = %user.id, "signed in");
        Ok(user)
    }

    /// The stored user, if any. A corrupt entry is logged and removed.
    pub fn current_user(&mut self) -> Option<User> {
        let raw = self.backend.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::warn!("failed to parse stored user: {err}");
                if let Err(err) = self.backend.remove(USER_KEY) {
                    tracing::warn!("failed to clear stored user: {err}");
                }
                None
            }
        }
    }

    /// Purges the user's saved predictions, then forgets the user.
    ///
    /// The `user` entry is removed even when the purge fails; the first
    /// error is returned.
    pub fn logout(&mut self, user: &User) -> Result<(), StorageError> {
        let purged = PredictionStore::new(&mut self.backend).purge_on_logout(&user.id);
        if let Err(err) = &purged {
            tracing::warn!(uid = %user.id, "failed to purge saved predictions: {err}");
        }
        let forgotten = self.backend.remove(USER_KEY);
        purged?;
        forgotten?;
        tracing::info!(uid = %user.id, "signed out");
        Ok(())
    }
}
