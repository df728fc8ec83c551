//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `KASIRA_API_URL` - Base URL of the backend API, including the `/api`
//!   prefix (e.g. `http://localhost:8000/api`)
//!
//! ## Optional
//! - `KASIRA_SESSION_FILE` - Where the durable session lives
//!   (default: `.kasira/session.json`)
//! - `KASIRA_DOWNLOAD_DIR` - Directory exported reports are written to
//!   (default: current directory)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

const DEFAULT_SESSION_FILE: &str = ".kasira/session.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, String),
}

/// Client application configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend API, including the `/api` prefix.
    pub api_url: Url,
    /// Path of the durable session file.
    pub session_file: PathBuf,
    /// Directory exported reports are written to.
    pub download_dir: PathBuf,
}

impl ClientConfig {
    /// Configuration with defaults for everything but the API base.
    #[must_use]
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            download_dir: PathBuf::from("."),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `KASIRA_API_URL` is missing or not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = required("KASIRA_API_URL")?;
        let api_url = Url::parse(&api_url)
            .map_err(|e| ConfigError::InvalidEnvVar("KASIRA_API_URL", e.to_string()))?;

        let mut config = Self::new(api_url);
        if let Ok(path) = std::env::var("KASIRA_SESSION_FILE") {
            config.session_file = PathBuf::from(path);
        }
        if let Ok(dir) = std::env::var("KASIRA_DOWNLOAD_DIR") {
            config.download_dir = PathBuf::from(dir);
        }
        Ok(config)
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_defaults() {
        let config = ClientConfig::new(Url::parse("http://localhost:8000/api").unwrap());
        assert_eq!(config.session_file, PathBuf::from(DEFAULT_SESSION_FILE));
        assert_eq!(config.download_dir, PathBuf::from("."));
    }

    #[test]
    fn test_missing_env_var_error_names_variable() {
        let err = ConfigError::MissingEnvVar("KASIRA_API_URL");
        assert!(err.to_string().contains("KASIRA_API_URL"));
    }
}
