//! Command-line arguments (clap derive).

use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::domain::{OrderSide, TimeInForce};

/// Drive a cryptocurrency exchange's trading REST API.
#[derive(Debug, Parser)]
#[command(name = "trading-cli", version, about)]
pub struct Cli {
    /// Display build/version information
    #[arg(long)]
    pub info: bool,

    /// Display license information
    #[arg(long)]
    pub license: bool,

    /// Path to a TOML config file
    #[arg(long, env = "TRADING_CLI_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all markets
    FetchMarkets(ExchangeArgs),
    /// Fetch order book for a market
    FetchOrderBook(FetchOrderBookArgs),
    /// Place a new order
    PlaceOrder(PlaceOrderArgs),
    /// Cancel an existing order
    CancelOrder(OrderIdArgs),
    /// List active orders, optionally for one market
    ListActiveOrders(ListActiveOrdersArgs),
    /// Get details of a single order
    GetOrder(OrderIdArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ExchangeArgs {
    /// Exchange adapter (defaults to the configured one)
    #[arg(long)]
    pub exchange: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct FetchOrderBookArgs {
    #[command(flatten)]
    pub exchange: ExchangeArgs,

    /// Market symbol, e.g. BTCBRL
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub market: String,

    /// Order book depth
    #[arg(long, default_value_t = 10)]
    pub depth: u32,
}

/// Order types the CLI can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderKind {
    Limit,
    Market,
}

#[derive(Debug, Clone, Args)]
pub struct PlaceOrderArgs {
    #[command(flatten)]
    pub exchange: ExchangeArgs,

    /// Market symbol, e.g. BTCBRL
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub market: String,

    /// Order quantity
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub quantity: String,

    /// Order price (required for limit orders, rejected for market orders)
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub price: Option<String>,

    /// Order side: buy|sell
    #[arg(long, default_value = "buy")]
    pub side: OrderSide,

    /// Order type
    #[arg(long = "order-type", value_enum, default_value_t = OrderKind::Limit)]
    pub order_type: OrderKind,

    /// Time in force: GTC|IOC|FOK (defaults to config)
    #[arg(long)]
    pub time_in_force: Option<TimeInForce>,

    /// Allow the order to take liquidity
    #[arg(long)]
    pub no_post_only: bool,
}

#[derive(Debug, Clone, Args)]
pub struct OrderIdArgs {
    #[command(flatten)]
    pub exchange: ExchangeArgs,

    /// Order ID
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub order_id: String,
}

#[derive(Debug, Clone, Args)]
pub struct ListActiveOrdersArgs {
    #[command(flatten)]
    pub exchange: ExchangeArgs,

    /// Market symbol; all markets when omitted
    #[arg(long)]
    pub market: Option<String>,
}
