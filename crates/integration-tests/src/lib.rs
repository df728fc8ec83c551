//! Integration tests for Kasira.
//!
//! The suites in `tests/` wire the full state layer - session, HTTP
//! adapter, domain stores, exporter - against a `wiremock` mock backend and
//! assert the observable contracts: what gets cached, what gets persisted,
//! where the UI is sent.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p kasira-integration-tests
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use url::Url;

use kasira_client::AppState;
use kasira_client::config::ClientConfig;
use kasira_client::router::Route;
use kasira_client::shell::Shell;
use kasira_client::storage::{MemoryStorage, SessionStorage};

/// Shell that records navigation and alerts for assertions.
#[derive(Default)]
pub struct RecordingShell {
    navigations: Mutex<Vec<Route>>,
    alerts: Mutex<Vec<String>>,
}

impl RecordingShell {
    /// Routes pushed so far, oldest first.
    pub fn navigations(&self) -> Vec<Route> {
        self.navigations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Alerts raised so far, oldest first.
    pub fn alerts(&self) -> Vec<String> {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Shell for RecordingShell {
    fn navigate(&self, route: Route) {
        self.navigations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }

    fn alert(&self, message: &str) {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

/// The state layer wired to a mock backend with in-memory storage.
pub struct TestApp {
    pub state: AppState,
    pub storage: Arc<MemoryStorage>,
    pub shell: Arc<RecordingShell>,
}

/// Build an app against `mock_base` (a `MockServer::uri()`), mounting the
/// API under `/api` the way a deployment does.
#[must_use]
pub fn test_app(mock_base: &str) -> TestApp {
    test_app_with_storage(mock_base, Arc::new(MemoryStorage::default()))
}

/// Same as [`test_app`], with pre-seeded storage.
#[must_use]
pub fn test_app_with_storage(mock_base: &str, storage: Arc<MemoryStorage>) -> TestApp {
    let api_url = Url::parse(&format!("{mock_base}/api")).expect("mock server URI is a URL");
    let config = ClientConfig::new(api_url);
    let shell = Arc::new(RecordingShell::default());
    let state = AppState::with_storage(
        &config,
        Arc::clone(&storage) as Arc<dyn SessionStorage>,
        Arc::clone(&shell) as Arc<dyn Shell>,
    );
    TestApp {
        state,
        storage,
        shell,
    }
}
