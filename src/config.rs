//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default account service address
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001/";

/// Environment variable overriding the account service address
pub const API_URL_ENV: &str = "SIGNUP_API_URL";

/// How long a toast stays on screen unless configured otherwise
const DEFAULT_NOTIFICATION_TTL_SECS: u64 = 5;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SignupConfig {
    /// Base URL of the account service
    pub api_base_url: Option<String>,
    /// Request timeout in seconds (no timeout when unset)
    pub request_timeout_secs: Option<u64>,
    /// Toast lifetime in seconds
    pub notification_ttl_secs: Option<u64>,
}

impl SignupConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: SignupConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration, writing a starter file on first run
    pub fn load_or_init() -> Result<Self> {
        let exists = Self::config_path().is_some_and(|path| path.exists());
        let config = Self::load()?;
        if !exists {
            let starter = Self {
                api_base_url: Some(config.resolve_api_base_url(None)),
                ..config.clone()
            };
            if let Err(e) = starter.save() {
                tracing::warn!("Could not write starter config: {e}");
            }
        }
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Resolve the base URL: environment first, then file, then the default
    pub fn api_base_url(&self) -> String {
        self.resolve_api_base_url(std::env::var(API_URL_ENV).ok())
    }

    fn resolve_api_base_url(&self, from_env: Option<String>) -> String {
        from_env
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_secs(
            self.notification_ttl_secs
                .unwrap_or(DEFAULT_NOTIFICATION_TTL_SECS),
        )
    }
}

/// Directory used for the log file
pub fn log_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "signup", "signup-tui")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SignupConfig::default();
        assert!(config.api_base_url.is_none());
        assert!(config.request_timeout_secs.is_none());
        assert!(config.notification_ttl_secs.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = SignupConfig {
            api_base_url: Some("http://accounts.local/api/".to_string()),
            request_timeout_secs: Some(10),
            notification_ttl_secs: Some(3),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: SignupConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.api_base_url,
            Some("http://accounts.local/api/".to_string())
        );
        assert_eq!(parsed.request_timeout_secs, Some(10));
        assert_eq!(parsed.notification_ttl_secs, Some(3));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: SignupConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.api_base_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"request_timeout_secs": 4, "unknown_field": "value"}"#;
        let parsed: SignupConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.request_timeout_secs, Some(4));
    }

    #[test]
    fn test_base_url_defaults() {
        let config = SignupConfig::default();
        assert_eq!(config.resolve_api_base_url(None), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_base_url_from_file() {
        let config = SignupConfig {
            api_base_url: Some("http://file.local/".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_base_url(None), "http://file.local/");
    }

    #[test]
    fn test_env_overrides_file() {
        let config = SignupConfig {
            api_base_url: Some("http://file.local/".to_string()),
            ..Default::default()
        };
        let resolved = config.resolve_api_base_url(Some("http://env.local/".to_string()));
        assert_eq!(resolved, "http://env.local/");
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let config = SignupConfig::default();
        let resolved = config.resolve_api_base_url(Some("  ".to_string()));
        assert_eq!(resolved, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_no_timeout_by_default() {
        assert!(SignupConfig::default().request_timeout().is_none());
    }

    #[test]
    fn test_notification_ttl_default_and_override() {
        assert_eq!(
            SignupConfig::default().notification_ttl(),
            Duration::from_secs(5)
        );
        let config = SignupConfig {
            notification_ttl_secs: Some(2),
            ..Default::default()
        };
        assert_eq!(config.notification_ttl(), Duration::from_secs(2));
    }

    #[test]
    fn test_load_returns_ok() {
        // Default config when the file doesn't exist
        let result = SignupConfig::load();
        assert!(result.is_ok());
    }
}
