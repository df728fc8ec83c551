//! Store settings store.
//!
//! No collection here - the backend holds exactly one settings record per
//! deployment and the client caches a copy with last-fetched-wins
//! semantics.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::error;

use kasira_core::StoreSettings;

use crate::api::ApiClient;

const SETTINGS_PATH: &str = "/settings/";

#[derive(Default)]
struct SettingsState {
    settings: StoreSettings,
    loading: bool,
}

/// Cache of the deployment settings record.
#[derive(Clone)]
pub struct SettingsStore {
    inner: Arc<SettingsStoreInner>,
}

struct SettingsStoreInner {
    api: ApiClient,
    state: RwLock<SettingsState>,
}

impl SettingsStore {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            inner: Arc::new(SettingsStoreInner {
                api,
                state: RwLock::new(SettingsState::default()),
            }),
        }
    }

    /// Snapshot of the cached settings.
    #[must_use]
    pub fn settings(&self) -> StoreSettings {
        self.state().settings.clone()
    }

    /// Whether a settings fetch is in flight.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.state().loading
    }

    /// Refresh the cached record.
    ///
    /// Failures are logged only; the cached copy stays as it was. `loading`
    /// is raised for the call's duration and reset on both outcomes.
    pub async fn fetch_settings(&self) {
        self.state_mut().loading = true;
        let result = self.inner.api.get::<StoreSettings>(SETTINGS_PATH).await;

        let mut state = self.state_mut();
        state.loading = false;
        match result {
            Ok(settings) => state.settings = settings,
            Err(err) => error!("failed to fetch settings: {err}"),
        }
    }

    /// Replace the deployment settings.
    ///
    /// Returns whether the write stuck - this resource reports a boolean
    /// instead of an error, diverging deliberately from the product store's
    /// convention. On success the cache takes the server's echoed record.
    pub async fn update_settings(&self, settings: &StoreSettings) -> bool {
        match self
            .inner
            .api
            .put::<_, StoreSettings>(SETTINGS_PATH, settings)
            .await
        {
            Ok(saved) => {
                self.state_mut().settings = saved;
                true
            }
            Err(err) => {
                error!("failed to update settings: {err}");
                false
            }
        }
    }

    fn state(&self) -> RwLockReadGuard<'_, SettingsState> {
        self.inner.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn state_mut(&self) -> RwLockWriteGuard<'_, SettingsState> {
        self.inner.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
