
/// Bearer token together with its absolute expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedToken {
    pub value: String,
    pub expires_at: i64, // UNIX TIMESTAMP
}

impl CachedToken {
    pub fn new(value: String, expires_at: i64) -> Self {
        Self { value, expires_at }
    }

    /// Usable only strictly before `expires_at - safety_margin_seconds`.
    pub fn is_fresh(&self, now: i64, safety_margin_seconds: i64) -> bool {
        now < self.expires_at - safety_margin_seconds
    }
}
