//! Session state and the auth store.
//!
//! The session is the client's belief about current authentication: the
//! bearer token plus the profile the backend issued it for. It is owned
//! exclusively by [`SessionStore`]; the HTTP adapter and the navigation
//! guard hold a [`SessionHandle`], a shared read view, so the token has a
//! single source of truth.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use kasira_core::UserProfile;

use crate::api::ApiClient;
use crate::router::Route;
use crate::shell::Shell;
use crate::storage::{SessionStorage, keys};

const LOGIN_PATH: &str = "/auth/login";
const REGISTER_PATH: &str = "/auth/register";

/// Errors that can occur during authentication operations.
///
/// The display form is exactly the message recorded on the session: the
/// server-supplied error when one was returned, otherwise a per-operation
/// default.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The login request failed.
    #[error("{0}")]
    LoginFailed(String),

    /// The registration request failed.
    #[error("{0}")]
    RegistrationFailed(String),
}

/// The client's belief about current authentication.
#[derive(Default)]
pub struct Session {
    user: Option<UserProfile>,
    token: Option<SecretString>,
    error: Option<String>,
}

/// Shared view of the session.
///
/// Cheap to clone; all clones observe the same state. Only the session
/// store writes through it.
#[derive(Clone, Default)]
pub struct SessionHandle {
    inner: Arc<RwLock<Session>>,
}

impl SessionHandle {
    /// Seed the session from durable storage.
    ///
    /// A stored token restores an authenticated session. Malformed stored
    /// data never fails construction: an unparseable profile discards the
    /// whole stored session, falling open to "unauthenticated".
    #[must_use]
    pub fn restore(storage: &dyn SessionStorage) -> Self {
        let token = storage.get(keys::TOKEN);
        let user = match storage.get(keys::USER) {
            Some(raw) => match serde_json::from_str::<UserProfile>(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    warn!("discarding stored session: malformed user profile: {err}");
                    return Self::default();
                }
            },
            None => None,
        };

        Self {
            inner: Arc::new(RwLock::new(Session {
                user,
                token: token.map(SecretString::from),
                error: None,
            })),
        }
    }

    /// Whether a session token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().token.is_some()
    }

    /// Snapshot of the current user profile.
    #[must_use]
    pub fn user(&self) -> Option<UserProfile> {
        self.read().user.clone()
    }

    /// The last recorded auth error message, if any.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.read().error.clone()
    }

    /// The raw token for the `Authorization` header.
    ///
    /// This is the one read-side boundary where the secret leaves its
    /// wrapper; everything else goes through [`Self::is_authenticated`].
    #[must_use]
    pub fn bearer_token(&self) -> Option<String> {
        self.read()
            .token
            .as_ref()
            .map(|token| token.expose_secret().to_string())
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Wire shape of a successful login.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
    user: UserProfile,
}

/// Owns the session: login, registration, logout, durable persistence.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionStoreInner>,
}

struct SessionStoreInner {
    api: ApiClient,
    handle: SessionHandle,
    storage: Arc<dyn SessionStorage>,
    shell: Arc<dyn Shell>,
}

impl SessionStore {
    /// Create the store over an already-restored handle.
    #[must_use]
    pub fn new(
        api: ApiClient,
        handle: SessionHandle,
        storage: Arc<dyn SessionStorage>,
        shell: Arc<dyn Shell>,
    ) -> Self {
        Self {
            inner: Arc::new(SessionStoreInner {
                api,
                handle,
                storage,
                shell,
            }),
        }
    }

    /// The shared session view.
    #[must_use]
    pub fn handle(&self) -> &SessionHandle {
        &self.inner.handle
    }

    /// Whether a session token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner.handle.is_authenticated()
    }

    /// Exchange credentials for a session.
    ///
    /// On success the token and profile are persisted to durable storage,
    /// every subsequent request carries the bearer token, and the UI is sent
    /// to the application root. On failure the message is recorded on the
    /// session and returned (throw-and-record).
    ///
    /// # Errors
    ///
    /// [`AuthError::LoginFailed`] with the server-supplied or default message.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let payload = serde_json::json!({ "username": username, "password": password });
        match self
            .inner
            .api
            .post::<_, LoginResponse>(LOGIN_PATH, &payload)
            .await
        {
            Ok(login) => {
                self.inner.storage.set(keys::TOKEN, &login.token);
                match serde_json::to_string(&login.user) {
                    Ok(raw) => self.inner.storage.set(keys::USER, &raw),
                    Err(err) => warn!("user profile not persisted: {err}"),
                }

                let mut session = self.inner.handle.write();
                session.token = Some(SecretString::from(login.token));
                session.user = Some(login.user);
                session.error = None;
                drop(session);

                self.inner.shell.navigate(Route::Dashboard);
                Ok(())
            }
            Err(err) => {
                let message = err.server_message().unwrap_or("Login failed").to_string();
                self.inner.handle.write().error = Some(message.clone());
                Err(AuthError::LoginFailed(message))
            }
        }
    }

    /// Create an account.
    ///
    /// Success does **not** authenticate - the caller logs in separately or
    /// navigates to the login surface. Returns `Ok(true)` so callers can key
    /// their redirect off the result.
    ///
    /// # Errors
    ///
    /// [`AuthError::RegistrationFailed`] with the server-supplied or default
    /// message.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<bool, AuthError> {
        let payload =
            serde_json::json!({ "username": username, "email": email, "password": password });
        match self.inner.api.post_ignore_body(REGISTER_PATH, &payload).await {
            Ok(()) => Ok(true),
            Err(err) => {
                let message = err
                    .server_message()
                    .unwrap_or("Registration failed")
                    .to_string();
                self.inner.handle.write().error = Some(message.clone());
                Err(AuthError::RegistrationFailed(message))
            }
        }
    }

    /// Clear the session, in memory and in durable storage, and send the UI
    /// to the login surface. Safe to call when already logged out.
    pub fn logout(&self) {
        *self.inner.handle.write() = Session::default();
        self.inner.storage.remove(keys::TOKEN);
        self.inner.storage.remove(keys::USER);
        self.inner.shell.navigate(Route::Login);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use kasira_core::UserId;

    fn stored_profile() -> String {
        serde_json::to_string(&UserProfile {
            id: UserId::new(1),
            username: "ayu".to_string(),
            email: "ayu@example.com".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_restore_with_token_is_authenticated() {
        let storage = MemoryStorage::default();
        storage.set(keys::TOKEN, "tok-123");
        storage.set(keys::USER, &stored_profile());

        let handle = SessionHandle::restore(&storage);
        assert!(handle.is_authenticated());
        assert_eq!(handle.bearer_token().as_deref(), Some("tok-123"));
        assert_eq!(handle.user().map(|u| u.username), Some("ayu".to_string()));
    }

    #[test]
    fn test_restore_empty_storage_is_unauthenticated() {
        let handle = SessionHandle::restore(&MemoryStorage::default());
        assert!(!handle.is_authenticated());
        assert!(handle.user().is_none());
        assert!(handle.bearer_token().is_none());
    }

    #[test]
    fn test_restore_malformed_profile_fails_open() {
        let storage = MemoryStorage::default();
        storage.set(keys::TOKEN, "tok-123");
        storage.set(keys::USER, "{definitely not json");

        let handle = SessionHandle::restore(&storage);
        assert!(!handle.is_authenticated());
        assert!(handle.user().is_none());
    }

    #[test]
    fn test_token_without_profile_still_authenticates() {
        let storage = MemoryStorage::default();
        storage.set(keys::TOKEN, "tok-123");

        let handle = SessionHandle::restore(&storage);
        assert!(handle.is_authenticated());
        assert!(handle.user().is_none());
    }
}
