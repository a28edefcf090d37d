//! Session lifecycle: the authoritative record of who is logged in.
//!
//! DESIGN
//! ======
//! The service is constructed explicitly and handed to whichever component
//! needs session data; no ambient globals. Hydration reads the persisted
//! token; `logout` is the teardown. The internal lock is only held in
//! synchronous sections, never across an await point, so concurrent
//! operations interleave between request issue and completion and the last
//! writer wins.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::gateway::{Gateway, GatewayError};
use crate::routes::Navigator;
use crate::storage::{KeyValueStore, TOKEN_KEY};
use crate::types::{LoginResponse, UserProfile};

/// In-memory session record. `user` is only ever set while a token is held.
#[derive(Debug, Clone, Default)]
struct Session {
    token: Option<String>,
    user: Option<UserProfile>,
}

/// Single source of truth for "is a user logged in and who are they".
pub struct SessionService {
    gateway: Arc<Gateway>,
    storage: Arc<dyn KeyValueStore>,
    navigator: Arc<dyn Navigator>,
    state: RwLock<Session>,
}

impl SessionService {
    /// Build the service and hydrate it from persisted storage: a token left
    /// by a previous run restores an authenticated (profile-less) session.
    #[must_use]
    pub fn hydrate(
        gateway: Arc<Gateway>,
        storage: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let token = storage.get(TOKEN_KEY);
        Self {
            gateway,
            storage,
            navigator,
            state: RwLock::new(Session { token, user: None }),
        }
    }

    /// Authenticate with form-encoded credentials.
    ///
    /// On success the access token is stored in memory and persisted
    /// storage, the profile is fetched, and the shell navigates to the
    /// application root. On failure the error propagates and prior session
    /// state is untouched.
    ///
    /// # Errors
    /// The gateway error for rejected credentials, transport failures, or
    /// unexpected statuses.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), GatewayError> {
        let fields = vec![
            ("username".to_owned(), username.to_owned()),
            ("password".to_owned(), password.to_owned()),
        ];
        let payload = self.gateway.post_form("/token", fields).await?;
        let response: LoginResponse = serde_json::from_value(payload)?;

        self.storage.set(TOKEN_KEY, &response.access_token);
        self.write_state().token = Some(response.access_token);
        tracing::info!(username, "session established");

        let _ = self.fetch_profile().await;
        self.navigator.replace(self.navigator.root_path());
        Ok(())
    }

    /// Fetch `/users/me` and store the profile.
    ///
    /// Any failure (unauthorized included) is fatal for the session: state
    /// is cleared and the shell returns to login. No retry, and the error is
    /// not surfaced; callers observe the logged-out state instead.
    pub async fn fetch_profile(&self) -> Option<UserProfile> {
        let fetched = self
            .gateway
            .get("/users/me")
            .await
            .and_then(|payload| serde_json::from_value::<UserProfile>(payload).map_err(GatewayError::from));
        match fetched {
            Ok(profile) => {
                let mut state = self.write_state();
                // A concurrent logout may have dropped the token; a profile
                // without a token would violate the session invariant.
                if state.token.is_some() {
                    state.user = Some(profile.clone());
                    Some(profile)
                } else {
                    None
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "profile fetch failed; clearing session");
                self.logout();
                None
            }
        }
    }

    /// Clear the session and return the shell to its login route.
    /// Idempotent: logging out twice ends in the same state.
    pub fn logout(&self) {
        {
            let mut state = self.write_state();
            state.token = None;
            state.user = None;
        }
        self.storage.remove(TOKEN_KEY);
        self.navigator.replace(self.navigator.login_path());
        tracing::info!("session cleared");
    }

    /// Token presence; no server-side validation happens at read time.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read_state().token.is_some()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.read_state().user.as_ref().is_some_and(UserProfile::is_admin)
    }

    #[must_use]
    pub fn is_manager(&self) -> bool {
        self.read_state().user.as_ref().is_some_and(UserProfile::is_manager)
    }

    /// Snapshot of the fetched profile, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<UserProfile> {
        self.read_state().user.clone()
    }

    fn read_state(&self) -> RwLockReadGuard<'_, Session> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, Session> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
