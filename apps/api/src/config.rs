use std::time::Duration;

use thiserror::Error;

/// Default bound on a single analysis call when `ANALYSIS_TIMEOUT_SECS` is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MAX_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Please configure your GOOGLE_API_KEY in secrets or environment variables.")]
    MissingCredential,

    #[error("Invalid value for '{key}': {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Application configuration loaded from environment variables (and `.env`, if present).
/// Startup halts if the API credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
    pub port: u16,
    pub analysis_timeout: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let google_api_key = lookup("GOOGLE_API_KEY")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingCredential)?;

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "PORT",
                reason: format!("must be a valid port number ({e})"),
            })?,
            None => 8080,
        };

        let timeout_secs = match lookup("ANALYSIS_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| ConfigError::Invalid {
                        key: "ANALYSIS_TIMEOUT_SECS",
                        reason: e.to_string(),
                    })?;
                if !(1..=MAX_TIMEOUT_SECS).contains(&secs) {
                    return Err(ConfigError::Invalid {
                        key: "ANALYSIS_TIMEOUT_SECS",
                        reason: format!("must be between 1 and {MAX_TIMEOUT_SECS} seconds"),
                    });
                }
                secs
            }
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            google_api_key,
            port,
            analysis_timeout: Duration::from_secs(timeout_secs),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
