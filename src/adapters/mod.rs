//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies. Each sub-module groups adapters by concern.
//!
//! Adapter categories:
//! - `http`: venue-neutral signed REST request pipeline
//! - `foxbit`: Foxbit REST v3 venue
//! - `settings`: construction settings shared by venues

pub mod foxbit;
pub mod http;
pub mod settings;

use std::sync::Arc;

use tracing::debug;

use crate::error::{ExchangeError, ExchangeResult};
use crate::ports::Exchange;

pub use settings::{OrderPolicy, VenueSettings};

/// Names accepted by [`build_exchange`].
pub const SUPPORTED_EXCHANGES: &[&str] = &["foxbit"];

/// Build the venue adapter registered under `name` (case-insensitive).
///
/// # Errors
/// - `UnknownExchange` if no adapter has that name
/// - `Transport` if the HTTP client cannot be constructed
pub fn build_exchange(name: &str, settings: VenueSettings) -> ExchangeResult<Arc<dyn Exchange>> {
    debug!(exchange = name, "Building exchange adapter");
    match name.to_ascii_lowercase().as_str() {
        "foxbit" => Ok(Arc::new(foxbit::FoxbitAdapter::new(settings)?)),
        _ => Err(ExchangeError::UnknownExchange(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::Credentials;

    #[test]
    fn test_build_known_exchange_case_insensitively() {
        let settings = VenueSettings::new(Credentials::new("k", "s"));
        assert!(build_exchange("FoxBit", settings).is_ok());
    }

    #[test]
    fn test_every_supported_exchange_builds() {
        for name in SUPPORTED_EXCHANGES {
            let settings = VenueSettings::new(Credentials::new("k", "s"));
            assert!(build_exchange(name, settings).is_ok(), "{name} should build");
        }
    }

    #[test]
    fn test_build_unknown_exchange_fails() {
        let settings = VenueSettings::new(Credentials::new("k", "s"));
        let err = build_exchange("binance", settings).err().unwrap();
        assert!(matches!(err, ExchangeError::UnknownExchange(name) if name == "binance"));
    }
}
