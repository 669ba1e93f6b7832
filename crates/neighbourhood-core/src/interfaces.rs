//! Cross-crate interface definitions.
//!
//! The login flow talks to the rest of the application through these
//! contracts: a navigator that performs the client-side transition and a
//! notifier that advances the ambient authentication state. Both are
//! fire-and-forget — the flow never consumes a return value from them.

use std::sync::Mutex;

use crate::session::Role;

/// Post-login destination, rendered as a client-side route token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    ResidentDashboard,
    Home,
}

impl Route {
    /// The route token handed to the client-side router.
    pub fn token(&self) -> &'static str {
        match self {
            Self::ResidentDashboard => "/resident-dashboard",
            Self::Home => "/home",
        }
    }

    /// Destination for a resolved role.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Resident => Self::ResidentDashboard,
            Role::CommitteeMember => Self::Home,
        }
    }
}

/// Performs client-side navigation. Implemented by the hosting application.
pub trait Navigator: Send + Sync {
    fn go_to(&self, route: Route);
}

/// Informs the surrounding application that authentication state changed.
///
/// Always an explicit injected dependency. Callers that don't track
/// authentication state pass [`NullNotifier`] instead of an optional
/// callback, so absence is a compile-time non-issue.
pub trait SessionNotifier: Send + Sync {
    fn notify(&self, authenticated: bool);
}

/// A notifier that ignores every notification.
pub struct NullNotifier;

impl SessionNotifier for NullNotifier {
    fn notify(&self, _authenticated: bool) {}
}

/// Test double recording every requested route.
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self {
            routes: Mutex::new(Vec::new()),
        }
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Default for RecordingNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

/// Test double recording every notification.
pub struct RecordingNotifier {
    calls: Mutex<Vec<bool>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<bool> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionNotifier for RecordingNotifier {
    fn notify(&self, authenticated: bool) {
        self.calls.lock().unwrap().push(authenticated);
    }
}
