use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_mode")]
    pub mode: String,
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_mode() -> String {
    "persistent".into()
}
fn default_db_path() -> String {
    "data/neighbourhood.db".into()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            mode: default_db_mode(),
            path: default_db_path(),
        }
    }
}

/// Accounts for the built-in development verifier.
///
/// The real credential verifier is an external provider; these entries only
/// back local runs and demos.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub accounts: Vec<AccountConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountConfig {
    pub email: String,
    pub password: String,
    pub subject_id: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            accounts: Vec::new(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config with fallback chain: explicit path → ./config/default.toml → hardcoded defaults.
    pub fn load_or_default(explicit_path: Option<&Path>) -> Self {
        if let Some(path) = explicit_path {
            match Self::load(path) {
                Ok(cfg) => return cfg,
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {e}", path.display());
                }
            }
        }

        let default_path = Path::new("config/default.toml");
        if default_path.exists() {
            match Self::load(default_path) {
                Ok(cfg) => return cfg,
                Err(e) => {
                    tracing::warn!("Failed to load default config: {e}");
                }
            }
        }

        tracing::info!("Using hardcoded default configuration");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_persistent_storage() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.database.mode, "persistent");
        assert_eq!(cfg.database.path, "data/neighbourhood.db");
        assert!(cfg.auth.accounts.is_empty());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [database]
            mode = "memory"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.database.mode, "memory");
        assert_eq!(cfg.database.path, "data/neighbourhood.db");
    }

    #[test]
    fn accounts_parse_from_toml() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [[auth.accounts]]
            email = "a@b.com"
            password = "x"
            subject_id = "u1"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.auth.accounts.len(), 1);
        assert_eq!(cfg.auth.accounts[0].email, "a@b.com");
        assert_eq!(cfg.auth.accounts[0].subject_id, "u1");
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.database.mode, "persistent");
        assert!(cfg.auth.accounts.is_empty());
    }
}
