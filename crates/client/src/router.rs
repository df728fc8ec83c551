//! Route table and navigation guard.
//!
//! The application surface is a fixed set of named routes; everything but
//! the login and register pages requires an authenticated session. The
//! guard is a pure predicate over the session - evaluated on every
//! transition, never cached.

use crate::session::SessionHandle;

/// Named routes of the application surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Inventory,
    Pos,
    Customers,
    Transactions,
    Settings,
    Tracking,
}

impl Route {
    /// Every route, in navigation-menu order.
    pub const ALL: [Self; 9] = [
        Self::Login,
        Self::Register,
        Self::Dashboard,
        Self::Inventory,
        Self::Pos,
        Self::Customers,
        Self::Transactions,
        Self::Settings,
        Self::Tracking,
    ];

    /// URL path of the route. The dashboard is the application root.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/",
            Self::Inventory => "/inventory",
            Self::Pos => "/pos",
            Self::Customers => "/customers",
            Self::Transactions => "/transactions",
            Self::Settings => "/settings",
            Self::Tracking => "/tracking",
        }
    }

    /// Whether entering this route requires an authenticated session.
    #[must_use]
    pub const fn requires_auth(self) -> bool {
        !matches!(self, Self::Login | Self::Register)
    }
}

/// Outcome of a navigation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Enter the target route.
    Proceed,
    /// Send the user to the login surface instead.
    RedirectToLogin,
}

/// Guard evaluated before every route transition.
///
/// Pure: the only effect is the returned decision, and the session is
/// re-read on each call.
#[must_use]
pub fn check_navigation(target: Route, session: &SessionHandle) -> NavigationDecision {
    if target.requires_auth() && !session.is_authenticated() {
        NavigationDecision::RedirectToLogin
    } else {
        NavigationDecision::Proceed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_routes() {
        assert!(!Route::Login.requires_auth());
        assert!(!Route::Register.requires_auth());
        for route in Route::ALL {
            if !matches!(route, Route::Login | Route::Register) {
                assert!(route.requires_auth(), "{route:?} should require auth");
            }
        }
    }

    #[test]
    fn test_dashboard_is_root() {
        assert_eq!(Route::Dashboard.path(), "/");
    }

    #[test]
    fn test_guard_redirects_unauthenticated() {
        let session = SessionHandle::default();
        assert_eq!(
            check_navigation(Route::Dashboard, &session),
            NavigationDecision::RedirectToLogin
        );
        // The public surfaces stay reachable.
        assert_eq!(
            check_navigation(Route::Login, &session),
            NavigationDecision::Proceed
        );
        assert_eq!(
            check_navigation(Route::Register, &session),
            NavigationDecision::Proceed
        );
    }
}
