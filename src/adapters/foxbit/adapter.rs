//! Foxbit Exchange Adapter — REST v3
//!
//! Implements the `Exchange` port on top of `SignedClient`. Each port
//! call maps to exactly one signed request; replies decode straight into
//! domain types.

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use super::types::{CancelOrderRequest, CreateOrderRequest, CreateOrderResponse, DataEnvelope};
use crate::adapters::http::{
    AuthHeaderNames, Credentials, HttpTransport, ReqwestTransport, SignedClient, SignedRequest,
    escape_path_segment,
};
use crate::adapters::settings::{OrderPolicy, VenueSettings};
use crate::domain::{Market, Order, OrderBook};
use crate::error::{ExchangeError, ExchangeResult};
use crate::ports::exchange::Exchange;

/// Production REST endpoint.
pub const BASE_URL: &str = "https://api.foxbit.com.br";

/// Foxbit auth header names.
pub const AUTH_HEADERS: AuthHeaderNames = AuthHeaderNames {
    api_key: "X-FB-ACCESS-KEY",
    timestamp: "X-FB-ACCESS-TIMESTAMP",
    signature: "X-FB-ACCESS-SIGNATURE",
};

const MARKETS_PATH: &str = "/rest/v3/markets";
const ORDERS_PATH: &str = "/rest/v3/orders";
const CANCEL_PATH: &str = "/rest/v3/orders/cancel";

/// Foxbit venue adapter.
///
/// Holds only immutable credentials (inside the client) and a reusable
/// transport; cheap to build once per command.
#[derive(Debug)]
pub struct FoxbitAdapter<T = ReqwestTransport> {
    client: SignedClient<T>,
    policy: OrderPolicy,
}

impl FoxbitAdapter {
    /// Build an adapter with a reqwest transport.
    ///
    /// # Errors
    /// Returns `Transport` if the HTTP client cannot be constructed.
    pub fn new(settings: VenueSettings) -> ExchangeResult<Self> {
        let transport = ReqwestTransport::new(settings.timeout)?;
        let base_url = settings.base_url.as_deref().unwrap_or(BASE_URL);
        debug!(
            base_url,
            authenticated = settings.credentials.is_complete(),
            "Foxbit adapter configured"
        );
        Ok(Self::with_transport(
            transport,
            settings.credentials,
            base_url,
            settings.order_policy,
        ))
    }
}

impl<T: HttpTransport> FoxbitAdapter<T> {
    /// Build an adapter over an arbitrary transport.
    pub fn with_transport(
        transport: T,
        credentials: Credentials,
        base_url: &str,
        policy: OrderPolicy,
    ) -> Self {
        Self {
            client: SignedClient::new(transport, credentials, base_url, AUTH_HEADERS),
            policy,
        }
    }

    /// Wire payload for `order`. Both policy fields go on every order.
    fn create_payload<'a>(&self, order: &'a Order) -> CreateOrderRequest<'a> {
        CreateOrderRequest {
            side: order.side,
            order_type: &order.order_type,
            market_symbol: &order.market_symbol,
            quantity: order.quantity.as_ref(),
            price: order.price.as_ref(),
            post_only: self.policy.post_only,
            time_in_force: self.policy.time_in_force,
        }
    }
}

#[async_trait]
impl<T: HttpTransport> Exchange for FoxbitAdapter<T> {
    #[instrument(skip(self))]
    async fn get_markets(&self) -> ExchangeResult<Vec<Market>> {
        let reply: DataEnvelope<Market> = self
            .client
            .send_json(SignedRequest::get(MARKETS_PATH))
            .await?;
        debug!(markets = reply.data.len(), "Markets fetched");
        Ok(reply.data)
    }

    #[instrument(skip(self))]
    async fn get_order_book(&self, market: &str, depth: u32) -> ExchangeResult<OrderBook> {
        let path = format!("{MARKETS_PATH}/{}/orderbook", escape_path_segment(market)?);
        let book: OrderBook = self
            .client
            .send_json(SignedRequest::get(path).query("depth", depth))
            .await?;
        debug!(
            bids = book.bids.len(),
            asks = book.asks.len(),
            "Order book fetched"
        );
        Ok(book)
    }

    #[instrument(skip(self, order), fields(market = %order.market_symbol, side = %order.side, order_type = %order.order_type))]
    async fn create_order(&self, order: Order) -> ExchangeResult<Order> {
        let request = SignedRequest::post(ORDERS_PATH).json(&self.create_payload(&order))?;
        let reply: CreateOrderResponse = self.client.send_json(request).await?;

        info!(order_id = %reply.id, sn = ?reply.sn, "Order placed");
        let placed = order.with_id(reply.id);
        if !placed.has_id() {
            return Err(ExchangeError::InvalidResponse(
                "order created without an id".to_string(),
            ));
        }
        Ok(placed)
    }

    #[instrument(skip(self))]
    async fn get_active_orders(&self, market: &str) -> ExchangeResult<Vec<Order>> {
        let request = SignedRequest::get(ORDERS_PATH)
            .query("state", "ACTIVE")
            .query_if_present("market_symbol", market);
        let reply: DataEnvelope<Order> = self.client.send_json(request).await?;
        debug!(orders = reply.data.len(), "Active orders fetched");
        Ok(reply.data)
    }

    #[instrument(skip(self))]
    async fn get_order_by_id(&self, id: &str) -> ExchangeResult<Order> {
        let path = format!("{ORDERS_PATH}/by-order-id/{}", escape_path_segment(id)?);
        self.client.send_json(SignedRequest::get(path)).await
    }

    #[instrument(skip(self))]
    async fn cancel_order(&self, id: &str) -> ExchangeResult<()> {
        let request = SignedRequest::put(CANCEL_PATH).json(&CancelOrderRequest::by_id(id))?;
        self.client.send(request).await?;
        info!(order_id = id, "Order cancelled");
        Ok(())
    }
}
