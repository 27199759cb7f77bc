//! Exchange error types
//!
//! Every failure produced while building, signing, sending or decoding a
//! venue request is an `ExchangeError`. Adapters and use cases pass these
//! through untouched so the CLI can still see the raw HTTP error body.

use thiserror::Error;

/// Errors raised by the signed request pipeline and venue adapters.
#[derive(Error, Debug)]
pub enum ExchangeError {
    /// Request body could not be serialized to JSON.
    #[error("failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Network, DNS, TLS or timeout failure while sending or reading.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Venue answered with status >= 400. `body` is the raw reply text.
    #[error("status {status}: {body}")]
    Http { status: u16, body: String },

    /// Response body did not match the expected shape.
    #[error("failed to decode response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// Caller input that cannot be sent as given (e.g. a `..` path segment).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Response decoded but broke an invariant (e.g. no order id).
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// No adapter is registered under the requested name.
    #[error("unknown exchange: {0}")]
    UnknownExchange(String),
}

impl ExchangeError {
    /// HTTP status code, if this is an HTTP error.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the venue reported the resource as missing.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404, .. })
    }
}

/// Result type alias for exchange operations
pub type ExchangeResult<T> = std::result::Result<T, ExchangeError>;
