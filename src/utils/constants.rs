//! Shared constants and invariants

pub const DEFAULT_AUTH_URL: &str = "https://ops.epo.org/3.2/auth/accesstoken";
pub const DEFAULT_BASE_URL: &str = "https://ops.epo.org/3.2/rest-services";

/// a cached token is reused only while `now < expires_at - TOKEN_SAFETY_MARGIN_SECS`
pub const TOKEN_SAFETY_MARGIN_SECS: i64 = 30;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const SERVER_NAME: &str = "EPO-MCP";
pub const DEFAULT_PROTOCOL_VERSION: &str = "2024-11-05";
