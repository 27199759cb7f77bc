//! Market Data Use Cases
//!
//! Read-only queries: the market list and a single order book.

use std::sync::Arc;

use tracing::instrument;

use crate::domain::{Market, OrderBook};
use crate::error::ExchangeResult;
use crate::ports::exchange::Exchange;

/// Lists every tradable market on the venue.
pub struct FetchMarkets<E: Exchange + ?Sized> {
  exchange: Arc<E>,
}

impl<E: Exchange + ?Sized> FetchMarkets<E> {
  pub const fn new(exchange: Arc<E>) -> Self {
    Self { exchange }
  }

  #[instrument(skip(self))]
  pub async fn execute(&self) -> ExchangeResult<Vec<Market>> {
    self.exchange.get_markets().await
  }
}

/// Fetches the order book (bids/asks) for one market.
pub struct FetchOrderBook<E: Exchange + ?Sized> {
  exchange: Arc<E>,
}

impl<E: Exchange + ?Sized> FetchOrderBook<E> {
  pub const fn new(exchange: Arc<E>) -> Self {
    Self { exchange }
  }

  #[instrument(skip(self))]
  pub async fn execute(&self, market: &str, depth: u32) -> ExchangeResult<OrderBook> {
    self.exchange.get_order_book(market, depth).await
  }
}
