//! CLI command implementations.

pub mod analytics;
pub mod auth;
pub mod export;
pub mod product;
pub mod settings;

use thiserror::Error;

use kasira_client::AppState;
use kasira_client::api::ApiError;
use kasira_client::router::{NavigationDecision, Route, check_navigation};
use kasira_client::session::AuthError;
use kasira_client::shell::Shell;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The target surface needs a session.
    #[error("redirected to /login - run `kasira login` first")]
    NotLoggedIn,

    /// Authentication failed; carries the recorded message.
    #[error("{0}")]
    Auth(#[from] AuthError),

    /// A backend call failed.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// A swallow-and-record store action failed; the recorded message.
    #[error("{0}")]
    Store(String),

    /// A local file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A local file did not parse.
    #[error("Invalid input: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shell for a terminal session: navigation becomes a log line, alerts go
/// straight to the operator.
pub struct TerminalShell;

impl Shell for TerminalShell {
    fn navigate(&self, route: Route) {
        tracing::info!("-> {}", route.path());
    }

    fn alert(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// The guard every authenticated surface runs before entry.
pub fn ensure_route(state: &AppState, route: Route) -> Result<(), CliError> {
    match check_navigation(route, state.session().handle()) {
        NavigationDecision::Proceed => Ok(()),
        NavigationDecision::RedirectToLogin => {
            state.shell().navigate(Route::Login);
            Err(CliError::NotLoggedIn)
        }
    }
}
