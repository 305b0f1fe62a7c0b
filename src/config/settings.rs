use serde::Deserialize;

use crate::utils::constants::{
    DEFAULT_AUTH_URL, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS,
};

/// ================================
/// Full service configuration
/// ================================
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ServiceConfig {
    #[serde(default)]
    pub ops: OpsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// ================================
/// OPS endpoints and request timeout
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct OpsConfig {
    /// OAuth2 client-credentials endpoint
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    /// prefix of every `rest-services` path, no trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
}

impl Default for OpsConfig {
    fn default() -> Self {
        Self {
            auth_url: default_auth_url(),
            base_url: default_base_url(),
            request_timeout_seconds: default_request_timeout_seconds(),
        }
    }
}

impl OpsConfig {
    /// Point both endpoints at one host, e.g. a mock server.
    pub fn with_host(host: &str) -> Self {
        let host = host.trim_end_matches('/');
        Self {
            auth_url: format!("{}/3.2/auth/accesstoken", host),
            base_url: format!("{}/3.2/rest-services", host),
            ..Self::default()
        }
    }
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String, // allowed: trace, debug, info, warn, error
    #[serde(default)]
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new(default_log_level(), LogFormat::default())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Compact,
}

fn default_auth_url() -> String {
    DEFAULT_AUTH_URL.to_owned()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}

fn default_request_timeout_seconds() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_log_level() -> String {
    "info".to_owned()
}
