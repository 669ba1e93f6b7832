//! CLI-side navigation: the route token is the whole contract, so the
//! binary just announces it. Real client-side routing lives in the hosting
//! frontend.

use neighbourhood_core::interfaces::{Navigator, Route, SessionNotifier};

pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn go_to(&self, route: Route) {
        tracing::info!(route = route.token(), "navigation requested");
        println!("Redirecting to {}", route.token());
    }
}

/// Logs authentication-state transitions instead of mutating a UI context.
pub struct LogNotifier;

impl SessionNotifier for LogNotifier {
    fn notify(&self, authenticated: bool) {
        tracing::info!(authenticated, "session state advanced");
    }
}
