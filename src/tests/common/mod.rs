// shared fixtures for the OPS mock-server tests
pub use httpmock::prelude::*;
pub use serde_json::json;

use httpmock::Mock;
use std::sync::Arc;
use std::time::Duration;

use crate::config::credentials::Credentials;
use crate::config::settings::OpsConfig;
use crate::helpers::time::ManualClock;
use crate::sources::fetch::OpsClient;

pub const TOKEN_PATH: &str = "/3.2/auth/accesstoken";
pub const REST_PREFIX: &str = "/3.2/rest-services";
pub const KEY: &str = "ops-key";
pub const SECRET: &str = "ops-secret";
/// base64("ops-key:ops-secret")
pub const BASIC_AUTH: &str = "Basic b3BzLWtleTpvcHMtc2VjcmV0";

pub fn credentials() -> Credentials {
    Credentials::new(KEY, SECRET)
}

pub fn ops_config(server: &MockServer) -> OpsConfig {
    OpsConfig::with_host(&server.base_url())
}

/// Client against `server` driven by a manual clock starting at t=0.
pub fn client_at_zero(server: &MockServer) -> (OpsClient, ManualClock) {
    let clock = ManualClock::new(0);
    let client = OpsClient::with_clock(&ops_config(server), credentials(), Arc::new(clock.clone()))
        .expect("client");
    (client, clock)
}

/// Token endpoint issuing `token` valid for `expires_in` seconds to the test credentials only.
pub async fn mock_token<'a>(server: &'a MockServer, token: &str, expires_in: u64) -> Mock<'a> {
    mock_token_delayed(server, token, expires_in, Duration::ZERO).await
}

pub async fn mock_token_delayed<'a>(
    server: &'a MockServer,
    token: &str,
    expires_in: u64,
    delay: Duration,
) -> Mock<'a> {
    let token = token.to_owned();
    server
        .mock_async(move |when, then| {
            when.method(POST)
                .path(TOKEN_PATH)
                .header("authorization", BASIC_AUTH)
                .body("grant_type=client_credentials");
            then.status(200)
                .header("Content-Type", "application/json")
                .delay(delay)
                // OPS sends expires_in as a string
                .json_body(json!({
                    "access_token": token,
                    "token_type": "BearerToken",
                    "expires_in": expires_in.to_string(),
                }));
        })
        .await
}

pub fn rest_path(tail: &str) -> String {
    format!("{}{}", REST_PREFIX, tail)
}
