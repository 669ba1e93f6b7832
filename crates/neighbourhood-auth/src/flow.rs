//! Login flow orchestration.
//!
//! One sequential chain per submission: verify the credentials, look up the
//! profile, branch on the role, then navigate and notify. Both external
//! calls are suspension points; no result from a later call is consumed
//! before an earlier one resolves. There are no retries, timeouts or
//! cancellation — a single attempt runs to completion or failure.

use std::sync::{Arc, Mutex, MutexGuard};

use neighbourhood_core::interfaces::{Navigator, Route, SessionNotifier};
use neighbourhood_core::session::Role;
use neighbourhood_db::ProfileStore;

use crate::error::{AuthError, AuthResult};
use crate::verifier::CredentialVerifier;

/// Transient credential pair. Held only in flow state, cleared on success.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub identifier: String,
    pub secret: String,
}

/// State owned exclusively by one flow instance.
#[derive(Debug, Clone, Default)]
pub struct FlowState {
    pub credentials: Credentials,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    /// True for the entire duration between submission start and the first
    /// terminal outcome. The input surface disables re-submission on it.
    pub submitting: bool,
}

/// Terminal result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed(String),
    /// A submission was already in flight; nothing was done.
    InFlight,
}

/// Orchestrates credential submission, role lookup, and the redirect
/// decision. All four collaborators are injected; the flow owns nothing but
/// its own state.
pub struct LoginFlow {
    verifier: Arc<dyn CredentialVerifier>,
    store: Arc<dyn ProfileStore>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn SessionNotifier>,
    state: Mutex<FlowState>,
}

impl LoginFlow {
    pub fn new(
        verifier: Arc<dyn CredentialVerifier>,
        store: Arc<dyn ProfileStore>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn SessionNotifier>,
    ) -> Self {
        Self {
            verifier,
            store,
            navigator,
            notifier,
            state: Mutex::new(FlowState::default()),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, FlowState> {
        self.state.lock().unwrap()
    }

    /// Snapshot of the current flow state for the input surface.
    pub fn state(&self) -> FlowState {
        self.lock_state().clone()
    }

    /// Input handler for the identifier field.
    pub fn set_identifier(&self, value: &str) {
        self.lock_state().credentials.identifier = value.to_string();
    }

    /// Input handler for the secret field.
    pub fn set_secret(&self, value: &str) {
        self.lock_state().credentials.secret = value.to_string();
    }

    /// Run one submission attempt to its terminal outcome.
    ///
    /// Re-entrant calls while a submission is in flight return
    /// [`Outcome::InFlight`] without touching any state, closing the
    /// double-submission race at the flow itself rather than only at the
    /// input surface.
    pub async fn submit(&self) -> Outcome {
        let credentials = {
            let mut state = self.lock_state();
            if state.submitting {
                return Outcome::InFlight;
            }
            state.error_message = None;
            state.success_message = None;
            state.submitting = true;
            state.credentials.clone()
        };

        tracing::debug!(identifier = %credentials.identifier, "login attempt");

        let result = self.attempt(&credentials).await;

        let mut state = self.lock_state();
        state.submitting = false;
        match result {
            Ok(role) => {
                tracing::info!(%role, "login succeeded");
                state.credentials = Credentials::default();
                state.success_message = Some("Logged in successfully!".to_string());
                drop(state);
                self.notifier.notify(true);
                Outcome::Succeeded
            }
            Err(err) => {
                let message = err.to_string();
                tracing::warn!(error = %message, "login failed");
                state.error_message = Some(message.clone());
                Outcome::Failed(message)
            }
        }
    }

    /// The sequential chain: verify, look up, branch, navigate. Each
    /// external failure is converted to an [`AuthError`] at its call site.
    async fn attempt(&self, credentials: &Credentials) -> AuthResult<Role> {
        let subject = self
            .verifier
            .verify(&credentials.identifier, &credentials.secret)
            .await?;
        tracing::debug!(subject = %subject.id, "credentials verified");

        let profile = self
            .store
            .get_profile(&subject.id)
            .await?
            .ok_or(AuthError::ProfileMissing)?;

        let role = Role::from_attribute(profile.role.as_deref())
            .map_err(|_| AuthError::UnknownRole(profile.role.unwrap_or_default()))?;
        tracing::debug!(%role, "resolved profile role");

        self.navigator.go_to(Route::for_role(role));
        Ok(role)
    }
}
