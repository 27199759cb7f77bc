//! Adapter construction settings.

use std::time::Duration;

use crate::adapters::http::Credentials;
use crate::adapters::http::transport::DEFAULT_TIMEOUT;
use crate::domain::TimeInForce;

/// Policy fields attached to every order an adapter creates.
///
/// Defaults to post-only GTC: orders rest on the book and never take
/// liquidity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderPolicy {
    pub post_only: bool,
    pub time_in_force: TimeInForce,
}

impl Default for OrderPolicy {
    fn default() -> Self {
        Self {
            post_only: true,
            time_in_force: TimeInForce::Gtc,
        }
    }
}

/// Everything a venue adapter needs at construction time.
#[derive(Debug, Clone)]
pub struct VenueSettings {
    pub credentials: Credentials,
    /// Overrides the venue's default base URL.
    pub base_url: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
    pub order_policy: OrderPolicy,
}

impl VenueSettings {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            order_policy: OrderPolicy::default(),
        }
    }
}
