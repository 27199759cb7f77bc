//! Order Use Cases
//!
//! Place, cancel and query orders. Each forwards to the matching
//! `Exchange` call and returns its result unchanged; they are the place
//! to hang cross-cutting concerns without touching ports or adapters.

use std::sync::Arc;

use tracing::instrument;

use crate::domain::Order;
use crate::error::ExchangeResult;
use crate::ports::exchange::Exchange;

/// Submits a new order and returns it with the venue-assigned id.
pub struct PlaceOrder<E: Exchange + ?Sized> {
  exchange: Arc<E>,
}

impl<E: Exchange + ?Sized> PlaceOrder<E> {
  pub const fn new(exchange: Arc<E>) -> Self {
    Self { exchange }
  }

  #[instrument(skip(self, order), fields(market = %order.market_symbol, side = %order.side))]
  pub async fn execute(&self, order: Order) -> ExchangeResult<Order> {
    self.exchange.create_order(order).await
  }
}

/// Cancels an existing order by id.
pub struct CancelOrder<E: Exchange + ?Sized> {
  exchange: Arc<E>,
}

impl<E: Exchange + ?Sized> CancelOrder<E> {
  pub const fn new(exchange: Arc<E>) -> Self {
    Self { exchange }
  }

  #[instrument(skip(self))]
  pub async fn execute(&self, id: &str) -> ExchangeResult<()> {
    self.exchange.cancel_order(id).await
  }
}

/// Lists active orders, optionally for one market.
pub struct ListActiveOrders<E: Exchange + ?Sized> {
  exchange: Arc<E>,
}

impl<E: Exchange + ?Sized> ListActiveOrders<E> {
  pub const fn new(exchange: Arc<E>) -> Self {
    Self { exchange }
  }

  #[instrument(skip(self))]
  pub async fn execute(&self, market: &str) -> ExchangeResult<Vec<Order>> {
    self.exchange.get_active_orders(market).await
  }
}

/// Retrieves a single order by id.
pub struct GetOrder<E: Exchange + ?Sized> {
  exchange: Arc<E>,
}

impl<E: Exchange + ?Sized> GetOrder<E> {
  pub const fn new(exchange: Arc<E>) -> Self {
    Self { exchange }
  }

  #[instrument(skip(self))]
  pub async fn execute(&self, id: &str) -> ExchangeResult<Order> {
    self.exchange.get_order_by_id(id).await
  }
}
