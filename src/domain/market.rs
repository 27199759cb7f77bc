//! Tradable market and its numeric formatting rules.

use serde::{Deserialize, Serialize};

use super::decimal::DecimalString;

/// Market symbol as used by the venue (e.g. `BTCBRL`).
pub type MarketSymbol = String;

/// A trading pair plus the bounds and increments the venue enforces.
///
/// Bounds stay as decimal strings; precisions are plain digit counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    pub symbol: MarketSymbol,
    pub price_min: DecimalString,
    pub price_increment: DecimalString,
    pub price_precision: u32,
    pub quantity_min: DecimalString,
    pub quantity_increment: DecimalString,
    pub quantity_precision: u32,
}
