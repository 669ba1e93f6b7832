//! Credential verification contract.
//!
//! The real verifier is an external managed identity provider; this crate
//! only defines the seam and a mock for tests and local runs.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{AuthError, AuthResult};

/// Opaque handle for an authenticated identity. The flow only reads the
/// subject identifier; everything else stays with the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub id: String,
}

/// Verifies an (identifier, secret) pair against the identity provider.
///
/// Uses `async-trait` for object safety (`dyn CredentialVerifier`).
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, identifier: &str, secret: &str) -> AuthResult<Subject>;
}

/// In-memory verifier with a fixed account table, for tests.
///
/// Rejections carry the same kind of human-readable description a managed
/// provider would return.
pub struct MockVerifier {
    accounts: HashMap<(String, String), String>,
    /// Scripted rejection: `Some(message)` carries the provider's
    /// description, `Some(None)` rejects without one.
    rejection: Mutex<Option<Option<String>>>,
}

impl MockVerifier {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
            rejection: Mutex::new(None),
        }
    }

    /// Register an account that verifies to the given subject id.
    pub fn with_account(mut self, identifier: &str, secret: &str, subject_id: &str) -> Self {
        self.accounts.insert(
            (identifier.to_string(), secret.to_string()),
            subject_id.to_string(),
        );
        self
    }

    /// Script the next rejections to carry a specific provider message
    /// (e.g. "Too many attempts. Try again later.").
    pub fn reject_with(&self, message: &str) {
        *self.rejection.lock().unwrap() = Some(Some(message.to_string()));
    }

    /// Script the next rejections to carry no description at all, like a
    /// provider failing without a usable error body.
    pub fn reject_without_message(&self) {
        *self.rejection.lock().unwrap() = Some(None);
    }
}

impl Default for MockVerifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialVerifier for MockVerifier {
    async fn verify(&self, identifier: &str, secret: &str) -> AuthResult<Subject> {
        if let Some(provider_message) = self.rejection.lock().unwrap().clone() {
            return Err(AuthError::credential(provider_message));
        }
        self.accounts
            .get(&(identifier.to_string(), secret.to_string()))
            .map(|id| Subject { id: id.clone() })
            .ok_or_else(|| AuthError::credential(Some("Invalid email or password.".into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_account_verifies() {
        let v = MockVerifier::new().with_account("a@b.com", "x", "u1");
        let subject = v.verify("a@b.com", "x").await.unwrap();
        assert_eq!(subject.id, "u1");
    }

    #[tokio::test]
    async fn wrong_secret_is_rejected() {
        let v = MockVerifier::new().with_account("a@b.com", "x", "u1");
        let err = v.verify("a@b.com", "wrong").await.unwrap_err();
        assert!(matches!(err, AuthError::Credential(_)));
    }

    #[tokio::test]
    async fn scripted_rejection_message_passes_through() {
        let v = MockVerifier::new().with_account("a@b.com", "x", "u1");
        v.reject_with("Too many attempts. Try again later.");
        let err = v.verify("a@b.com", "x").await.unwrap_err();
        assert_eq!(err.to_string(), "Too many attempts. Try again later.");
    }

    #[tokio::test]
    async fn rejection_without_message_falls_back_to_generic() {
        let v = MockVerifier::new().with_account("a@b.com", "x", "u1");
        v.reject_without_message();
        let err = v.verify("a@b.com", "x").await.unwrap_err();
        assert_eq!(err.to_string(), crate::error::GENERIC_LOGIN_ERROR);
    }
}
