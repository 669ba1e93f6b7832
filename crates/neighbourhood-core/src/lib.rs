pub mod config;
pub mod interfaces;
pub mod lifecycle;
pub mod session;

pub use interfaces::{Navigator, Route, SessionNotifier};
pub use session::{Role, SessionEvent};
