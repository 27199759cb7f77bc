//! Request Authentication — HMAC-SHA256 Signing
//!
//! Signs every venue request with HMAC-SHA256 over
//! `timestamp + METHOD + path + query + body`, hex encoded. Credentials
//! come from environment variables chosen by the caller.

use std::fmt;

use chrono::Utc;
use tracing::warn;

/// Names of the three auth headers a venue expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthHeaderNames {
    /// Header carrying the API key.
    pub api_key: &'static str,
    /// Header carrying the millisecond timestamp used in the signature.
    pub timestamp: &'static str,
    /// Header carrying the hex HMAC signature.
    pub signature: &'static str,
}

/// API key + shared secret.
///
/// The secret never leaves this struct: only signatures computed from it
/// are sent, and `Debug` redacts it.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Load credentials from the named environment variables.
    ///
    /// Missing variables yield empty values and a warning: public market
    /// data endpoints still answer without valid credentials.
    pub fn from_env(key_var: &str, secret_var: &str) -> Self {
        let api_key = std::env::var(key_var).unwrap_or_else(|_| {
            warn!(var = key_var, "API key not set, requests will be unauthenticated");
            String::new()
        });
        let api_secret = std::env::var(secret_var).unwrap_or_else(|_| {
            warn!(var = secret_var, "API secret not set, signatures will be invalid");
            String::new()
        });
        Self::new(api_key, api_secret)
    }

    /// Get the API key for request headers.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Whether both key and secret are present.
    pub fn is_complete(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }

    /// Hex-encoded HMAC-SHA256 of `message` keyed by the secret.
    pub fn sign(&self, message: &[u8]) -> String {
        let mac = hmac_sha256::HMAC::mac(message, self.api_secret.as_bytes());
        hex::encode(mac)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Build the pre-signature string.
///
/// Fixed order: timestamp, upper-case method, path (no host, no query),
/// canonical query (may be empty), body bytes (may be empty).
pub fn prehash(timestamp: &str, method: &str, path: &str, query: &str, body: &[u8]) -> Vec<u8> {
    let mut message =
        Vec::with_capacity(timestamp.len() + method.len() + path.len() + query.len() + body.len());
    message.extend_from_slice(timestamp.as_bytes());
    message.extend_from_slice(method.to_ascii_uppercase().as_bytes());
    message.extend_from_slice(path.as_bytes());
    message.extend_from_slice(query.as_bytes());
    message.extend_from_slice(body);
    message
}

/// Current Unix time in milliseconds.
pub fn timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}
