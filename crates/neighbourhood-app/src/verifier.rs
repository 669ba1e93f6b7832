//! Development stand-in for the external identity provider.
//!
//! Local runs have no managed provider to call, so the binary verifies
//! against accounts from the config file (or the built-in demo accounts when
//! none are configured). This is a dev convenience, not a reimplementation
//! of the provider.

use async_trait::async_trait;

use neighbourhood_auth::error::{AuthError, AuthResult};
use neighbourhood_auth::verifier::{CredentialVerifier, Subject};
use neighbourhood_core::config::{AccountConfig, AuthConfig};

pub struct SeededVerifier {
    accounts: Vec<AccountConfig>,
}

impl SeededVerifier {
    pub fn from_config(config: &AuthConfig) -> Self {
        let accounts = if config.accounts.is_empty() {
            demo_accounts()
        } else {
            config.accounts.clone()
        };
        Self { accounts }
    }
}

/// Demo accounts matching the seed profiles: one per flow path.
pub fn demo_accounts() -> Vec<AccountConfig> {
    [
        ("resident@neighbourhood.test", "resident123", "resident-demo"),
        ("committee@neighbourhood.test", "committee123", "committee-demo"),
        ("pending@neighbourhood.test", "pending123", "pending-demo"),
        ("ghost@neighbourhood.test", "ghost123", "ghost-demo"),
    ]
    .into_iter()
    .map(|(email, password, subject_id)| AccountConfig {
        email: email.to_string(),
        password: password.to_string(),
        subject_id: subject_id.to_string(),
    })
    .collect()
}

#[async_trait]
impl CredentialVerifier for SeededVerifier {
    async fn verify(&self, identifier: &str, secret: &str) -> AuthResult<Subject> {
        self.accounts
            .iter()
            .find(|a| a.email == identifier && a.password == secret)
            .map(|a| Subject {
                id: a.subject_id.clone(),
            })
            .ok_or_else(|| AuthError::Credential("Invalid email or password.".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn configured_account_verifies() {
        let config = AuthConfig {
            accounts: vec![AccountConfig {
                email: "a@b.com".into(),
                password: "x".into(),
                subject_id: "u1".into(),
            }],
        };
        let v = SeededVerifier::from_config(&config);
        let subject = v.verify("a@b.com", "x").await.unwrap();
        assert_eq!(subject.id, "u1");
    }

    #[tokio::test]
    async fn empty_config_falls_back_to_demo_accounts() {
        let v = SeededVerifier::from_config(&AuthConfig::default());
        let subject = v
            .verify("resident@neighbourhood.test", "resident123")
            .await
            .unwrap();
        assert_eq!(subject.id, "resident-demo");
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let v = SeededVerifier::from_config(&AuthConfig::default());
        let err = v
            .verify("resident@neighbourhood.test", "nope")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password.");
    }
}
