//! Login failure taxonomy.
//!
//! Every external call converts its failure at the call site; nothing
//! propagates past the flow as an untyped error. Callers only ever see the
//! prose message — there are no structured error codes.

use thiserror::Error;

use neighbourhood_db::DbError;

/// Fallback when the provider rejects a login without a description.
pub const GENERIC_LOGIN_ERROR: &str = "An error occurred during login.";

#[derive(Debug, Error)]
pub enum AuthError {
    /// The verifier rejected the identifier/secret pair. Recoverable by the
    /// user; the message is the provider's description verbatim.
    #[error("{0}")]
    Credential(String),

    /// The authenticated subject has no profile document. Signals a
    /// data-integrity gap between the identity system and the profile store.
    #[error("User profile not found. Please register or contact support.")]
    ProfileMissing,

    /// The profile's role attribute is an unrecognized non-empty value.
    /// Signals a data-entry problem in the profile record.
    #[error("Unknown user role. Please contact support.")]
    UnknownRole(String),

    /// The profile store itself failed to answer.
    #[error("Profile lookup failed: {0}")]
    Store(#[from] DbError),
}

impl AuthError {
    /// Build a credential rejection from an optional provider message.
    pub fn credential(provider_message: Option<String>) -> Self {
        match provider_message {
            Some(msg) if !msg.is_empty() => Self::Credential(msg),
            _ => Self::Credential(GENERIC_LOGIN_ERROR.to_string()),
        }
    }
}

pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_keeps_provider_message_verbatim() {
        let err = AuthError::credential(Some("Account disabled".into()));
        assert_eq!(err.to_string(), "Account disabled");
    }

    #[test]
    fn credential_without_message_uses_generic() {
        assert_eq!(
            AuthError::credential(None).to_string(),
            GENERIC_LOGIN_ERROR
        );
        assert_eq!(
            AuthError::credential(Some(String::new())).to_string(),
            GENERIC_LOGIN_ERROR
        );
    }

    #[test]
    fn profile_missing_tells_user_to_register() {
        let msg = AuthError::ProfileMissing.to_string();
        assert!(msg.contains("profile not found"));
        assert!(msg.contains("register"));
    }

    #[test]
    fn unknown_role_tells_user_to_contact_support() {
        let msg = AuthError::UnknownRole("Treasurer".into()).to_string();
        assert!(msg.contains("Unknown user role"));
        assert!(msg.contains("contact support"));
    }

    #[test]
    fn store_error_converts_via_from() {
        let err: AuthError = DbError::Query("timeout".into()).into();
        assert!(err.to_string().contains("timeout"));
    }
}
