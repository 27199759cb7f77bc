//! Foxbit REST v3 Request/Response Types
//!
//! Wire shapes that differ from the domain types. Markets, orders and
//! order books decode straight into `crate::domain`; only envelopes and
//! command payloads live here.

use serde::{Deserialize, Serialize};

use crate::domain::order::deserialize_id;
use crate::domain::{DecimalString, OrderId, OrderSide, OrderType, TimeInForce};

/// List responses wrap their items in `{"data": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
  #[serde(default = "Vec::new")]
  pub data: Vec<T>,
}

/// Order creation payload.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderRequest<'a> {
  /// "BUY" or "SELL".
  pub side: OrderSide,
  /// "LIMIT", "MARKET", ...
  #[serde(rename = "type")]
  pub order_type: &'a OrderType,
  pub market_symbol: &'a str,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub quantity: Option<&'a DecimalString>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub price: Option<&'a DecimalString>,
  /// Reject instead of taking liquidity.
  pub post_only: bool,
  pub time_in_force: TimeInForce,
}

/// Response from order creation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderResponse {
  /// Assigned order ID (string or integer on the wire). Empty if absent.
  #[serde(default, deserialize_with = "deserialize_id")]
  pub id: OrderId,
  /// Venue sequence number, when present.
  #[serde(default)]
  pub sn: Option<String>,
}

/// Cancel-by-id payload: `{"type":"ID","id":"..."}`.
#[derive(Debug, Clone, Serialize)]
pub struct CancelOrderRequest<'a> {
  #[serde(rename = "type")]
  pub kind: &'static str,
  pub id: &'a str,
}

impl<'a> CancelOrderRequest<'a> {
  pub const fn by_id(id: &'a str) -> Self {
    Self { kind: "ID", id }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_cancel_request_serialization() {
    let json = serde_json::to_string(&CancelOrderRequest::by_id("xyz")).unwrap();
    assert_eq!(json, r#"{"type":"ID","id":"xyz"}"#);
  }

  #[test]
  fn test_create_order_response_accepts_numeric_id() {
    let resp: CreateOrderResponse = serde_json::from_str(r#"{"id": 987654321, "sn": "OKMAKSDHRVVREK"}"#).unwrap();
    assert_eq!(resp.id, "987654321");
    assert_eq!(resp.sn.as_deref(), Some("OKMAKSDHRVVREK"));
  }

  #[test]
  fn test_create_order_response_missing_id_is_empty() {
    let resp: CreateOrderResponse = serde_json::from_str(r#"{"sn": "x"}"#).unwrap();
    assert!(resp.id.is_empty());
  }

  #[test]
  fn test_envelope_without_data_is_empty() {
    let envelope: DataEnvelope<u32> = serde_json::from_str("{}").unwrap();
    assert!(envelope.data.is_empty());
  }
}
