#[cfg(test)]
mod test {

    use std::sync::Arc;
    use std::time::Duration;

    use crate::config::proc_loader::parse_config;
    use crate::error::OpsError;
    use crate::helpers::time::ManualClock;
    use crate::sources::fetch::OpsClient;
    use crate::tests::common::*;

    #[tokio::test]
    async fn token_reused_inside_window_and_refreshed_within_skew() {
        let server = MockServer::start_async().await;
        let (client, clock) = client_at_zero(&server);
        let mut first = mock_token(&server, "token-1", 1200).await;

        // t=0: exchange
        assert_eq!(client.tokens().acquire().await.unwrap(), "token-1");
        first.assert_hits_async(1).await;
        assert_eq!(client.tokens().peek().await.unwrap().expires_at, 1200);

        // t=1000: cache hit
        clock.set(1000);
        assert_eq!(client.tokens().acquire().await.unwrap(), "token-1");
        first.assert_hits_async(1).await;

        // t=1175 is inside the 30s skew: new exchange
        first.delete_async().await;
        let second = mock_token(&server, "token-2", 1200).await;
        clock.set(1175);
        assert_eq!(client.tokens().acquire().await.unwrap(), "token-2");
        second.assert_hits_async(1).await;
        assert_eq!(client.tokens().peek().await.unwrap().expires_at, 1175 + 1200);
    }

    #[tokio::test]
    async fn rejected_credentials_leave_nothing_cached() {
        let server = MockServer::start_async().await;
        let (client, _clock) = client_at_zero(&server);
        let mut denied = server
            .mock_async(|when, then| {
                when.method(POST).path(TOKEN_PATH);
                then.status(401).body("invalid client");
            })
            .await;

        let err = client.tokens().acquire().await.unwrap_err();
        match &err {
            OpsError::Authentication { status, body } => {
                assert_eq!(status.as_u16(), 401);
                assert_eq!(body, "invalid client");
            }
            other => panic!("expected authentication error, got {other:?}"),
        }
        assert!(client.tokens().peek().await.is_none());

        // next call retries the exchange
        denied.delete_async().await;
        let granted = mock_token(&server, "token-after-retry", 1200).await;
        assert_eq!(client.tokens().acquire().await.unwrap(), "token-after-retry");
        granted.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_slot_intact() {
        let server = MockServer::start_async().await;
        let (client, clock) = client_at_zero(&server);
        let mut first = mock_token(&server, "token-1", 100).await;
        client.tokens().acquire().await.unwrap();
        first.delete_async().await;

        server
            .mock_async(|when, then| {
                when.method(POST).path(TOKEN_PATH);
                then.status(503).body("maintenance");
            })
            .await;
        clock.set(90);

        let err = client.tokens().acquire().await.unwrap_err();
        assert!(matches!(err, OpsError::Authentication { .. }));
        let slot = client.tokens().peek().await.unwrap();
        assert_eq!((slot.value.as_str(), slot.expires_at), ("token-1", 100));
    }

    #[tokio::test]
    async fn malformed_token_response_is_a_decode_error() {
        let server = MockServer::start_async().await;
        let (client, _clock) = client_at_zero(&server);
        server
            .mock_async(|when, then| {
                when.method(POST).path(TOKEN_PATH);
                then.status(200).json_body(json!({"access_token": "abc", "expires_in": "twenty"}));
            })
            .await;

        let err = client.tokens().acquire().await.unwrap_err();
        assert!(matches!(err, OpsError::Decode(_)), "{err:?}");
        assert!(client.tokens().peek().await.is_none());
    }

    #[tokio::test]
    async fn expiry_beyond_the_clock_range_is_a_decode_error() {
        for expires_in in ["9223372036854775807", "18446744073709551615"] {
            let server = MockServer::start_async().await;
            let (client, clock) = client_at_zero(&server);
            clock.set(1_700_000_000);
            let token = server
                .mock_async(move |when, then| {
                    when.method(POST).path(TOKEN_PATH);
                    then.status(200).json_body(json!({"access_token": "a", "expires_in": expires_in}));
                })
                .await;

            let err = client.tokens().acquire().await.unwrap_err();
            assert!(matches!(err, OpsError::Decode(_)), "{expires_in}: {err:?}");
            assert!(client.tokens().peek().await.is_none());

            let err = client.tokens().acquire().await.unwrap_err();
            assert!(matches!(err, OpsError::Decode(_)));
            token.assert_hits_async(2).await;
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_acquires_share_one_exchange() {
        let server = MockServer::start_async().await;
        let (client, _clock) = client_at_zero(&server);
        let token = mock_token_delayed(&server, "shared-token", 1200, Duration::from_millis(300)).await;

        let mut handles = Vec::new();
        for _ in 0..8 {
            let client = client.clone();
            handles.push(tokio::spawn(async move { client.tokens().acquire().await }));
        }

        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap(), "shared-token");
        }
        token.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn settings_file_cannot_shrink_the_refresh_skew() {
        let server = MockServer::start_async().await;
        let yaml = format!(
            "ops:\n  auth_url: {host}{TOKEN_PATH}\n  base_url: {host}{REST_PREFIX}\n  safety_margin_seconds: 0\n",
            host = server.base_url()
        );
        let config = parse_config(&yaml).unwrap();
        let clock = ManualClock::new(0);
        let client = OpsClient::with_clock(&config.ops, credentials(), Arc::new(clock.clone())).unwrap();
        let mut first = mock_token(&server, "token-1", 100).await;

        assert_eq!(client.tokens().acquire().await.unwrap(), "token-1");
        clock.set(69);
        assert_eq!(client.tokens().acquire().await.unwrap(), "token-1");
        first.assert_hits_async(1).await;

        // t=70 is inside the fixed 30s skew even though the file asked for none
        first.delete_async().await;
        let second = mock_token(&server, "token-2", 100).await;
        clock.set(70);
        assert_eq!(client.tokens().acquire().await.unwrap(), "token-2");
        second.assert_hits_async(1).await;
    }
}
