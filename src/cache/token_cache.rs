use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::cache::token::CachedToken;
use crate::error::Result;
use crate::helpers::time::{Clock, SystemClock};
use crate::sources::oauth2::OAuth2Source;
use crate::utils::constants::TOKEN_SAFETY_MARGIN_SECS;

/// Single-slot cache for the OPS access token.
///
/// The slot lock is held across the whole check-and-refresh, so concurrent
/// callers that find the slot stale queue behind one exchange and then see its
/// result instead of starting their own.
#[derive(Debug)]
pub struct TokenCache {
    source: OAuth2Source,
    clock: Arc<dyn Clock>,
    slot: Mutex<Option<CachedToken>>,
}

impl TokenCache {
    pub fn new(source: OAuth2Source) -> Self {
        Self::with_clock(source, Arc::new(SystemClock))
    }

    pub fn with_clock(source: OAuth2Source, clock: Arc<dyn Clock>) -> Self {
        Self {
            source,
            clock,
            slot: Mutex::new(None),
        }
    }

    /// Return a token valid for at least the safety margin, exchanging
    /// credentials first when the slot is empty or about to expire.
    pub async fn acquire(&self) -> Result<String> {
        let mut slot = self.slot.lock().await;

        let now = self.clock.now_unix();
        if let Some(token) = slot.as_ref().filter(|t| t.is_fresh(now, TOKEN_SAFETY_MARGIN_SECS)) {
            debug!(expires_at = token.expires_at, "token cache hit");
            return Ok(token.value.clone());
        }

        info!(had_token = slot.is_some(), "refreshing OPS access token");
        let token = self
            .source
            .fetch_token(self.clock.as_ref())
            .await
            .inspect_err(|e| warn!(error = %e, "OPS token refresh failed"))?;

        if !token.is_fresh(self.clock.now_unix(), TOKEN_SAFETY_MARGIN_SECS) {
            warn!(
                expires_at = token.expires_at,
                "OPS issued a token shorter-lived than the safety margin"
            );
        }

        let value = token.value.clone();
        *slot = Some(token);
        Ok(value)
    }

    /// Current slot content, fresh or not. Never triggers a refresh.
    pub async fn peek(&self) -> Option<CachedToken> {
        self.slot.lock().await.clone()
    }
}
