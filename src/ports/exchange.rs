//! Exchange Port - Venue Capability Interface
//!
//! The single seam between use cases and venue specifics. Any venue that
//! answers these six calls with these shapes can be plugged in without
//! touching use-case or CLI code.
//!
//! Key design decisions:
//! - One HTTP round trip per call, no internal retries
//! - Errors are returned as produced by the request pipeline
//! - Prices and quantities stay decimal strings

use async_trait::async_trait;

use crate::domain::{Market, Order, OrderBook};
use crate::error::ExchangeResult;

/// Trait for venue adapters.
///
/// Implementors hold only immutable credentials and a reusable HTTP
/// transport, so a fresh adapter can be built per command.
#[async_trait]
pub trait Exchange: Send + Sync {
  /// List every tradable market.
  async fn get_markets(&self) -> ExchangeResult<Vec<Market>>;

  /// Fetch the order book for `market`, at most `depth` levels per side.
  async fn get_order_book(&self, market: &str, depth: u32) -> ExchangeResult<OrderBook>;

  /// Submit a new order.
  ///
  /// Returns the input order annotated with the venue-assigned id. The
  /// returned id is always non-empty.
  ///
  /// # Errors
  /// Returns error if the venue rejects the order or replies without an id.
  async fn create_order(&self, order: Order) -> ExchangeResult<Order>;

  /// List active orders, optionally restricted to one market.
  ///
  /// An empty `market` means no market filter.
  async fn get_active_orders(&self, market: &str) -> ExchangeResult<Vec<Order>>;

  /// Fetch a single order by its venue id.
  async fn get_order_by_id(&self, id: &str) -> ExchangeResult<Order>;

  /// Cancel a single order by its venue id.
  async fn cancel_order(&self, id: &str) -> ExchangeResult<()>;
}
