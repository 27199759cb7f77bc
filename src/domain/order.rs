//! Order entity and the enums describing it.
//!
//! An `Order` is built locally without an id, sent through the
//! `Exchange` port, and comes back with the venue-assigned id. State is
//! never tracked in place: a fresh fetch yields a fresh value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::decimal::DecimalString;
use super::market::MarketSymbol;

/// Venue-assigned order identifier.
pub type OrderId = String;

// ────────────────────────────────────────────
// Enums
// ────────────────────────────────────────────

/// Buy or sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for OrderSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            other => Err(format!("invalid side '{other}', use buy or sell")),
        }
    }
}

/// Order type. `Other` keeps venue-specific types we don't model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderType {
    Limit,
    Market,
    Other(String),
}

impl OrderType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Limit => "LIMIT",
            Self::Market => "MARKET",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for OrderType {
    fn from(value: String) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "LIMIT" => Self::Limit,
            "MARKET" => Self::Market,
            _ => Self::Other(value),
        }
    }
}

impl From<OrderType> for String {
    fn from(value: OrderType) -> Self {
        match value {
            OrderType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How long a resting order stays live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeInForce {
    /// Good till cancelled.
    #[default]
    Gtc,
    /// Immediate or cancel.
    Ioc,
    /// Fill or kill.
    Fok,
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gtc => write!(f, "GTC"),
            Self::Ioc => write!(f, "IOC"),
            Self::Fok => write!(f, "FOK"),
        }
    }
}

impl FromStr for TimeInForce {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GTC" => Ok(Self::Gtc),
            "IOC" => Ok(Self::Ioc),
            "FOK" => Ok(Self::Fok),
            other => Err(format!("invalid time in force '{other}', use GTC, IOC or FOK")),
        }
    }
}

// ────────────────────────────────────────────
// Order
// ────────────────────────────────────────────

/// A trading order.
///
/// `id` is `None` until the venue accepts a create request. `state` is the
/// venue's own vocabulary ("ACTIVE", "FILLED", ...) and is not interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_id"
    )]
    pub id: Option<OrderId>,
    pub market_symbol: MarketSymbol,
    pub side: OrderSide,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<DecimalString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<DecimalString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl Order {
    /// New limit order, not yet submitted.
    pub fn limit(
        market_symbol: impl Into<MarketSymbol>,
        side: OrderSide,
        price: impl Into<DecimalString>,
        quantity: impl Into<DecimalString>,
    ) -> Self {
        Self {
            id: None,
            market_symbol: market_symbol.into(),
            side,
            order_type: OrderType::Limit,
            price: Some(price.into()),
            quantity: Some(quantity.into()),
            state: None,
        }
    }

    /// New market order, not yet submitted. Market orders carry no price.
    pub fn market(
        market_symbol: impl Into<MarketSymbol>,
        side: OrderSide,
        quantity: impl Into<DecimalString>,
    ) -> Self {
        Self {
            id: None,
            market_symbol: market_symbol.into(),
            side,
            order_type: OrderType::Market,
            price: None,
            quantity: Some(quantity.into()),
            state: None,
        }
    }

    /// Copy of this order annotated with the venue-assigned id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<OrderId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Whether the venue has assigned an id.
    pub fn has_id(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

// ────────────────────────────────────────────
// Id decoding
// ────────────────────────────────────────────

/// Ids arrive either as JSON strings or as integers depending on endpoint.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

impl From<RawId> for OrderId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => text,
            RawId::Number(n) => n.to_string(),
        }
    }
}

/// Deserialize an id given as a string or an integer.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<OrderId, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(OrderId::from)
}

/// Like [`deserialize_id`], mapping `null` and `""` to `None`.
pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<OrderId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawId>::deserialize(deserializer)?;
    Ok(raw.map(OrderId::from).filter(|id| !id.is_empty()))
}
