//! Integration Tests - Use Cases and CLI Dispatch over a Mocked Venue
//!
//! Tests the interaction between usecases, the CLI runner and the
//! `Exchange` port. Uses mockall for trait mocking and tokio::test for
//! async tests.

use std::sync::Arc;

use clap::Parser;
use mockall::mock;

use trading_cli::cli::{Cli, Command, runner};
use trading_cli::domain::{
    DecimalString, Market, Order, OrderBook, OrderSide, OrderType, PriceLevel,
};
use trading_cli::error::{ExchangeError, ExchangeResult};
use trading_cli::ports::Exchange;
use trading_cli::usecases::{
    CancelOrder, FetchMarkets, FetchOrderBook, GetOrder, ListActiveOrders, PlaceOrder,
};

// ---- Mock Definitions ----

mock! {
    pub Venue {}

    #[async_trait::async_trait]
    impl Exchange for Venue {
        async fn get_markets(&self) -> ExchangeResult<Vec<Market>>;
        async fn get_order_book(&self, market: &str, depth: u32) -> ExchangeResult<OrderBook>;
        async fn create_order(&self, order: Order) -> ExchangeResult<Order>;
        async fn get_active_orders(&self, market: &str) -> ExchangeResult<Vec<Order>>;
        async fn get_order_by_id(&self, id: &str) -> ExchangeResult<Order>;
        async fn cancel_order(&self, id: &str) -> ExchangeResult<()>;
    }
}

// ---- Helpers ----

fn btcbrl() -> Market {
    Market {
        symbol: "BTCBRL".to_string(),
        price_min: DecimalString::new("0.0001"),
        price_increment: DecimalString::new("0.0001"),
        price_precision: 4,
        quantity_min: DecimalString::new("0.00002"),
        quantity_increment: DecimalString::new("0.00001"),
        quantity_precision: 5,
    }
}

fn command(args: &[&str]) -> Command {
    let mut argv = vec!["trading-cli"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv)
        .expect("arguments should parse")
        .command
        .expect("subcommand expected")
}

const NOT_FOUND_BODY: &str = r#"{"error":{"message":"not found","code":4,"details":[]}}"#;

fn not_found() -> ExchangeError {
    ExchangeError::Http {
        status: 404,
        body: NOT_FOUND_BODY.to_string(),
    }
}

// ---- Use Case Tests ----

#[tokio::test]
async fn test_place_order_returns_order_with_venue_id() {
    let mut venue = MockVenue::new();
    venue
        .expect_create_order()
        .withf(|order| {
            order.id.is_none()
                && order.market_symbol == "BTCBRL"
                && order.price.as_ref().map(DecimalString::as_str) == Some("300000.00")
        })
        .times(1)
        .returning(|order| Ok(order.with_id("abc123")));

    let input = Order::limit("BTCBRL", OrderSide::Buy, "300000.00", "0.01");
    let placed = PlaceOrder::new(Arc::new(venue))
        .execute(input.clone())
        .await
        .unwrap();

    assert_eq!(placed.id.as_deref(), Some("abc123"));
    assert_eq!(placed.market_symbol, input.market_symbol);
    assert_eq!(placed.side, input.side);
    assert_eq!(placed.order_type, OrderType::Limit);
    assert_eq!(placed.quantity, input.quantity);
    assert_eq!(placed.price, input.price);
}

#[tokio::test]
async fn test_fetch_order_book_forwards_market_and_depth() {
    let mut venue = MockVenue::new();
    venue
        .expect_get_order_book()
        .withf(|market, depth| market.to_string() == "BTCBRL" && *depth == 5)
        .times(1)
        .returning(|_, _| {
            Ok(OrderBook {
                bids: vec![PriceLevel::new("299990.00", "0.1")],
                asks: vec![PriceLevel::new("300010.00", "0.2")],
                ..OrderBook::default()
            })
        });

    let book = FetchOrderBook::new(Arc::new(venue))
        .execute("BTCBRL", 5)
        .await
        .unwrap();
    assert_eq!(book.best_bid().unwrap().price().as_str(), "299990.00");
    assert_eq!(book.best_ask().unwrap().quantity().as_str(), "0.2");
}

#[tokio::test]
async fn test_fetch_markets_passes_venue_list_through() {
    let mut venue = MockVenue::new();
    venue
        .expect_get_markets()
        .times(1)
        .returning(|| Ok(vec![btcbrl()]));

    let markets = FetchMarkets::new(Arc::new(venue)).execute().await.unwrap();
    assert_eq!(markets, vec![btcbrl()]);
}

#[tokio::test]
async fn test_list_active_orders_without_market_filter() {
    let mut venue = MockVenue::new();
    venue
        .expect_get_active_orders()
        .withf(|market| market.is_empty())
        .times(1)
        .returning(|_| Ok(Vec::new()));

    let orders = ListActiveOrders::new(Arc::new(venue))
        .execute("")
        .await
        .unwrap();
    assert!(orders.is_empty());
}

#[tokio::test]
async fn test_errors_propagate_unchanged() {
    let mut venue = MockVenue::new();
    venue
        .expect_get_order_by_id()
        .times(1)
        .returning(|_| Err(not_found()));
    venue
        .expect_cancel_order()
        .times(1)
        .returning(|_| Err(not_found()));
    let venue = Arc::new(venue);

    let err = GetOrder::new(Arc::clone(&venue))
        .execute("missing")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), format!("status 404: {NOT_FOUND_BODY}"));

    let err = CancelOrder::new(venue).execute("missing").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

// ---- CLI Dispatch Tests ----

#[tokio::test]
async fn test_dispatch_fetch_markets_renders_table() {
    let mut venue = MockVenue::new();
    venue
        .expect_get_markets()
        .times(1)
        .returning(|| Ok(vec![btcbrl()]));

    let out = runner::dispatch(Arc::new(venue), &command(&["fetch-markets"]))
        .await
        .unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("SYMBOL"));
    assert!(lines[1].starts_with("BTCBRL"));
}

#[tokio::test]
async fn test_dispatch_upper_cases_order_book_market() {
    let mut venue = MockVenue::new();
    venue
        .expect_get_order_book()
        .withf(|market, depth| market.to_string() == "ETHBRL" && *depth == 10)
        .times(1)
        .returning(|_, _| Ok(OrderBook::default()));

    let out = runner::dispatch(
        Arc::new(venue),
        &command(&["fetch-order-book", "--market", "ethbrl"]),
    )
    .await
    .unwrap();
    assert_eq!(out, "SIDE  PRICE  QUANTITY\n");
}

#[tokio::test]
async fn test_dispatch_rejects_bad_order_before_calling_venue() {
    let mut venue = MockVenue::new();
    venue.expect_create_order().never();

    let result = runner::dispatch(
        Arc::new(venue),
        &command(&["place-order", "--market", "BTCBRL", "--quantity", "abc", "--price", "1"]),
    )
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_dispatch_market_order_has_no_price() {
    let mut venue = MockVenue::new();
    venue
        .expect_create_order()
        .withf(|order| order.order_type == OrderType::Market && order.price.is_none())
        .times(1)
        .returning(|order| Ok(order.with_id("42")));

    let out = runner::dispatch(
        Arc::new(venue),
        &command(&[
            "place-order",
            "--market",
            "BTCBRL",
            "--quantity",
            "0.5",
            "--side",
            "sell",
            "--order-type",
            "market",
        ]),
    )
    .await
    .unwrap();
    let row: Vec<&str> = out.lines().nth(1).unwrap().split_whitespace().collect();
    assert_eq!(row, ["42", "BTCBRL", "SELL", "MARKET", "0.5"]);
}

#[tokio::test]
async fn test_dispatch_get_order_error_keeps_http_body() {
    let mut venue = MockVenue::new();
    venue
        .expect_get_order_by_id()
        .withf(|id| id.to_string() == "nope")
        .returning(|_| Err(not_found()));

    let err = runner::dispatch(Arc::new(venue), &command(&["get-order", "--order-id", "nope"]))
        .await
        .unwrap_err();
    let exchange_error = err.downcast_ref::<ExchangeError>().unwrap();
    assert!(exchange_error.is_not_found());
    assert!(exchange_error.to_string().contains(r#""code":4"#));
}
