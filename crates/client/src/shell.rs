//! Browser integration seam.
//!
//! Two UI side effects happen outside the state layer: route pushes (login
//! redirects to the dashboard, logout to the login surface) and blocking
//! alerts (export failures). In the browser these are the router and
//! `window.alert`; behind this trait the crate stays headless and tests can
//! record both.

use crate::router::Route;

/// The UI surface the state layer pushes side effects to.
pub trait Shell: Send + Sync {
    /// Navigate the UI to a route.
    fn navigate(&self, route: Route);

    /// Surface a blocking, user-facing message.
    fn alert(&self, message: &str);
}

/// Shell that logs navigation and alerts instead of acting on them.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopShell;

impl Shell for NoopShell {
    fn navigate(&self, route: Route) {
        tracing::debug!(path = route.path(), "navigation requested");
    }

    fn alert(&self, message: &str) {
        tracing::warn!("alert: {message}");
    }
}
