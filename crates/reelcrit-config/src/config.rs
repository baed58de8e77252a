use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The production backend. Earlier iterations of the service carried two
/// hardcoded hosts; a single configured endpoint supersedes both.
pub const DEFAULT_BASE_URL: &str = "http://review.impati.net";

/// Environment variable that overrides the configured base URL.
pub const BASE_URL_ENV: &str = "REELCRIT_API_URL";

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Load from the given path; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Effective base URL: environment override beats the config file.
    pub fn base_url(&self) -> String {
        std::env::var(BASE_URL_ENV).unwrap_or_else(|_| self.api.base_url.clone())
    }

    /// External login page users are sent to when a session is missing or
    /// expired. The client never calls this endpoint itself.
    pub fn login_url(&self) -> String {
        format!("{}/v1/members/login", self.base_url().trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config {
            api: ApiConfig {
                base_url: "http://localhost:8080".into(),
            },
        };
        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.api.base_url, "http://localhost:8080");
    }

    #[test]
    fn login_url_is_members_login() {
        let config = Config {
            api: ApiConfig {
                base_url: "http://localhost:8080/".into(),
            },
        };
        // Ignore the env override in this test.
        if std::env::var(BASE_URL_ENV).is_err() {
            assert_eq!(config.login_url(), "http://localhost:8080/v1/members/login");
        }
    }
}
