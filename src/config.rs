//! Environment-driven settings, validated once at startup.

use reqwest::Url;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_MAX_RETRIES: u32 = 1;
pub const DEFAULT_RETRY_BACKOFF_MS: u64 = 200;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid number: '{value}'")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} must be greater than zero")]
    Zero { var: &'static str },
    #[error("{var} is not a valid http(s) URL: '{value}'")]
    InvalidUrl { var: &'static str, value: String },
}

/// Where and how the proxy reaches the creative backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base address; the proxy appends `/generate-creative`.
    pub base_url: Url,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Retries for connection failures only.
    pub max_retries: u32,
    pub retry_backoff: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BACKEND_URL).expect("default backend URL is valid"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_backoff: Duration::from_millis(DEFAULT_RETRY_BACKOFF_MS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub backend: BackendConfig,
    /// Base address the UI posts submissions to. Defaults to this server.
    pub proxy_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(v) => v.parse::<u16>().map_err(|_| ConfigError::InvalidNumber { var: "PORT", value: v })?,
            None => DEFAULT_PORT,
        };

        let base_url = match get("CREATIVE_BACKEND_URL") {
            Some(v) => parse_http_url("CREATIVE_BACKEND_URL", &v)?,
            None => BackendConfig::default().base_url,
        };

        let timeout = positive_secs(get("CREATIVE_BACKEND_TIMEOUT_SECS"), "CREATIVE_BACKEND_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let connect_timeout = positive_secs(
            get("CREATIVE_BACKEND_CONNECT_TIMEOUT_SECS"),
            "CREATIVE_BACKEND_CONNECT_TIMEOUT_SECS",
            DEFAULT_CONNECT_TIMEOUT_SECS,
        )?;

        let max_retries = match get("CREATIVE_BACKEND_MAX_RETRIES") {
            Some(v) => v
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidNumber { var: "CREATIVE_BACKEND_MAX_RETRIES", value: v })?,
            None => DEFAULT_MAX_RETRIES,
        };

        let retry_backoff = match get("CREATIVE_BACKEND_RETRY_BACKOFF_MS") {
            Some(v) => Duration::from_millis(
                v.parse::<u64>()
                    .map_err(|_| ConfigError::InvalidNumber { var: "CREATIVE_BACKEND_RETRY_BACKOFF_MS", value: v })?,
            ),
            None => Duration::from_millis(DEFAULT_RETRY_BACKOFF_MS),
        };

        let proxy_url = match get("STUDIO_PROXY_URL") {
            Some(v) => parse_http_url("STUDIO_PROXY_URL", &v)?,
            None => parse_http_url("STUDIO_PROXY_URL", &format!("http://127.0.0.1:{port}"))?,
        };

        Ok(Self {
            port,
            backend: BackendConfig { base_url, timeout, connect_timeout, max_retries, retry_backoff },
            proxy_url,
        })
    }
}

fn positive_secs(value: Option<String>, var: &'static str, default: u64) -> Result<Duration, ConfigError> {
    let secs = match value {
        Some(v) => v.parse::<u64>().map_err(|_| ConfigError::InvalidNumber { var, value: v })?,
        None => default,
    };
    if secs == 0 {
        return Err(ConfigError::Zero { var });
    }
    Ok(Duration::from_secs(secs))
}

fn parse_http_url(var: &'static str, value: &str) -> Result<Url, ConfigError> {
    let invalid = || ConfigError::InvalidUrl { var, value: value.to_string() };
    let url = Url::parse(value).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }
    Ok(url)
}

/// Joins a base address and an absolute path without doubling slashes.
pub fn endpoint(base: &Url, path: &str) -> String {
    format!("{}/{}", base.as_str().trim_end_matches('/'), path.trim_start_matches('/'))
}
