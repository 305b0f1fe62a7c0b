use std::fmt;
use tracing::warn;

/// Candidate environment keys for the consumer key, most preferred first.
pub const KEY_ENV_VARS: [&str; 2] = ["EPO_KEY", "EPO_CONSUMER_KEY"];
/// Candidate environment keys for the consumer secret, most preferred first.
pub const SECRET_ENV_VARS: [&str; 2] = ["EPO_SECRET", "EPO_CONSUMER_SECRET"];

/// OPS consumer key and secret, resolved once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    key: String,
    secret: String,
}

impl Credentials {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self { key: key.into(), secret: secret.into() }
    }

    /// Resolve from the process environment.
    pub fn from_env() -> Self {
        Self::resolve(|name| std::env::var(name).ok())
    }

    /// Resolve with an arbitrary lookup. The first candidate holding a non-empty
    /// value wins. A missing value resolves to an empty string; OPS rejects it at
    /// the first token exchange.
    pub fn resolve<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = first_present(&KEY_ENV_VARS, &lookup);
        let secret = first_present(&SECRET_ENV_VARS, &lookup);

        if key.is_none() {
            warn!(candidates = ?KEY_ENV_VARS, "OPS consumer key is not set");
        }
        if secret.is_none() {
            warn!(candidates = ?SECRET_ENV_VARS, "OPS consumer secret is not set");
        }

        Self::new(key.unwrap_or_default(), secret.unwrap_or_default())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn is_complete(&self) -> bool {
        !self.key.is_empty() && !self.secret.is_empty()
    }
}

// keep the secret out of logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"***")
            .finish()
    }
}

fn first_present<F>(candidates: &[&str], lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    candidates
        .iter()
        .filter_map(|name| lookup(name))
        .map(|value| value.trim().to_owned())
        .find(|value| !value.is_empty())
}
