//! Order book snapshot.

use serde::{Deserialize, Serialize};

use super::decimal::DecimalString;

/// One `[price, quantity]` level, exactly as the venue sent it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLevel(pub DecimalString, pub DecimalString);

impl PriceLevel {
    pub fn new(price: impl Into<DecimalString>, quantity: impl Into<DecimalString>) -> Self {
        Self(price.into(), quantity.into())
    }

    pub const fn price(&self) -> &DecimalString {
        &self.0
    }

    pub const fn quantity(&self) -> &DecimalString {
        &self.1
    }
}

/// Bids and asks, best to worst, in venue order. Never mutated locally:
/// a new fetch replaces the whole book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBook {
    #[serde(default)]
    pub bids: Vec<PriceLevel>,
    #[serde(default)]
    pub asks: Vec<PriceLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_id: Option<u64>,
    /// Venue snapshot time (Unix ms) when provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

impl OrderBook {
    pub fn best_bid(&self) -> Option<&PriceLevel> {
        self.bids.first()
    }

    pub fn best_ask(&self) -> Option<&PriceLevel> {
        self.asks.first()
    }

    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}
