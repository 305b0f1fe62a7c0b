use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::cache::token::CachedToken;
use crate::config::credentials::Credentials;
use crate::error::{OpsError, Result};
use crate::helpers::time::Clock;

const GRANT_TYPE: [(&str, &str); 1] = [("grant_type", "client_credentials")];

/// OAuth2 client-credentials exchange against the OPS token endpoint.
#[derive(Debug, Clone)]
pub struct OAuth2Source {
    pub auth_url: String,
    pub credentials: Credentials,
    pub client: Client,
}

impl OAuth2Source {
    pub fn new(auth_url: String, credentials: Credentials, client: Client) -> Self {
        Self { auth_url, credentials, client }
    }

    /// One POST to the token endpoint. Expiry is computed from `clock` once the
    /// response has arrived.
    pub async fn fetch_token(&self, clock: &dyn Clock) -> Result<CachedToken> {
        let response = self
            .client
            .post(&self.auth_url)
            .basic_auth(self.credentials.key(), Some(self.credentials.secret()))
            .form(&GRANT_TYPE)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(OpsError::Authentication { status, body });
        }

        let (value, expires_in) = parse_token_response(&body)?;
        let now = clock.now_unix();
        let expires_at = now.checked_add(expires_in).ok_or_else(|| {
            OpsError::Decode(format!("expires_in {} overflows the expiry instant", expires_in))
        })?;
        let token = CachedToken::new(value, expires_at);
        debug!(expires_in, expires_at = token.expires_at, "OPS token issued");
        Ok(token)
    }
}

/// Extract `access_token` and `expires_in` (seconds, JSON integer or integer string).
pub fn parse_token_response(body: &str) -> Result<(String, i64)> {
    let json: Value = serde_json::from_str(body)
        .map_err(|e| OpsError::Decode(format!("token response is not JSON: {}", e)))?;

    let value = json
        .get("access_token")
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| OpsError::Decode("token response has no access_token".to_owned()))?
        .to_owned();

    let expires_in = match json.get("expires_in") {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
    .ok_or_else(|| {
        OpsError::Decode(format!(
            "token response has no integer expires_in: {}",
            json.get("expires_in").map(Value::to_string).unwrap_or_else(|| "missing".to_owned())
        ))
    })?;

    let expires_in = i64::try_from(expires_in)
        .map_err(|_| OpsError::Decode(format!("expires_in {} is out of range", expires_in)))?;
    Ok((value, expires_in))
}
