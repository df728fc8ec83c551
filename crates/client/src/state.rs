//! Application state shared across the UI surface.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::report::ReportExporter;
use crate::session::{SessionHandle, SessionStore};
use crate::shell::Shell;
use crate::storage::{FileStorage, SessionStorage};
use crate::stores::{AnalyticsStore, ProductStore, SettingsStore};

/// Application state: the session plus one store per backend resource.
///
/// Cheaply cloneable via `Arc`. Construction keeps the token to a single
/// source of truth: the session handle is restored from durable storage
/// first and the HTTP adapter reads it on every request - no store ever
/// configures a header of its own.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    session: SessionStore,
    products: ProductStore,
    settings: SettingsStore,
    analytics: AnalyticsStore,
    exporter: ReportExporter,
    shell: Arc<dyn Shell>,
}

impl AppState {
    /// Wire the full state layer from configuration.
    ///
    /// Durable storage lives at `config.session_file`.
    #[must_use]
    pub fn new(config: &ClientConfig, shell: Arc<dyn Shell>) -> Self {
        let storage: Arc<dyn SessionStorage> = Arc::new(FileStorage::open(&config.session_file));
        Self::with_storage(config, storage, shell)
    }

    /// Same wiring with caller-supplied storage (tests pass
    /// [`crate::storage::MemoryStorage`]).
    #[must_use]
    pub fn with_storage(
        config: &ClientConfig,
        storage: Arc<dyn SessionStorage>,
        shell: Arc<dyn Shell>,
    ) -> Self {
        let handle = SessionHandle::restore(storage.as_ref());
        let api = ApiClient::new(&config.api_url, handle.clone());

        Self {
            inner: Arc::new(AppStateInner {
                session: SessionStore::new(
                    api.clone(),
                    handle,
                    Arc::clone(&storage),
                    Arc::clone(&shell),
                ),
                products: ProductStore::new(api.clone()),
                settings: SettingsStore::new(api.clone()),
                analytics: AnalyticsStore::new(api),
                exporter: ReportExporter::new(&config.download_dir),
                shell,
            }),
        }
    }

    /// The session store.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    /// The product catalog store.
    #[must_use]
    pub fn products(&self) -> &ProductStore {
        &self.inner.products
    }

    /// The settings store.
    #[must_use]
    pub fn settings(&self) -> &SettingsStore {
        &self.inner.settings
    }

    /// The analytics store.
    #[must_use]
    pub fn analytics(&self) -> &AnalyticsStore {
        &self.inner.analytics
    }

    /// The report exporter, writing into the configured download directory.
    #[must_use]
    pub fn exporter(&self) -> &ReportExporter {
        &self.inner.exporter
    }

    /// The UI shell side effects are pushed to.
    #[must_use]
    pub fn shell(&self) -> &dyn Shell {
        self.inner.shell.as_ref()
    }
}
