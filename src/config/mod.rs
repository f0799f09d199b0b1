//! Runtime configuration.
//!
//! Everything has a sensible default; environment variables override the
//! HTTP client settings and can point at an alternate reference data file.

use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Environment variable names.
pub const ENV_TIMEOUT_SECS: &str = "SINOSCOPE_TIMEOUT_SECS";
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "SINOSCOPE_CONNECT_TIMEOUT_SECS";
pub const ENV_USER_AGENT: &str = "SINOSCOPE_USER_AGENT";
pub const ENV_MAX_REDIRECTS: &str = "SINOSCOPE_MAX_REDIRECTS";
pub const ENV_MAX_BODY_BYTES: &str = "SINOSCOPE_MAX_BODY_BYTES";
pub const ENV_REFERENCE_DATA: &str = "SINOSCOPE_REFERENCE_DATA";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_REDIRECTS: usize = 10;
const DEFAULT_MAX_BODY_BYTES: u64 = 5 * 1024 * 1024; // 5MB
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// HTTP client settings, fixed once the client is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
    pub max_redirects: usize,
    pub max_body_bytes: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub fetcher: FetcherConfig,
    /// JSON file replacing the built-in reference data.
    pub reference_data: Option<PathBuf>,
}

impl Config {
    /// Load from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let fetcher = FetcherConfig {
            timeout: Duration::from_secs(parse_var(ENV_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS)?),
            connect_timeout: Duration::from_secs(parse_var(
                ENV_CONNECT_TIMEOUT_SECS,
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?),
            user_agent: env::var(ENV_USER_AGENT)
                .ok()
                .filter(|ua| !ua.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            max_redirects: parse_var(ENV_MAX_REDIRECTS, DEFAULT_MAX_REDIRECTS)?,
            max_body_bytes: parse_var(ENV_MAX_BODY_BYTES, DEFAULT_MAX_BODY_BYTES)?,
        };

        if fetcher.timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: ENV_TIMEOUT_SECS,
                reason: "must be greater than zero".to_string(),
            });
        }

        let reference_data = env::var_os(ENV_REFERENCE_DATA)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            fetcher,
            reference_data,
        })
    }
}

fn parse_var<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|err: T::Err| ConfigError::InvalidValue {
            field: name,
            reason: format!("{raw:?}: {err}"),
        }),
        Err(_) => Ok(default),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
