//! Command dispatch.
//!
//! Builds the venue adapter for the selected exchange, runs one use case
//! and renders its result. Tables go to stdout, failures to stderr.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::CommandFactory;
use tracing::debug;

use super::about;
use super::args::{Cli, Command, ExchangeArgs, OrderKind, PlaceOrderArgs};
use super::display;
use super::error_format;
use crate::adapters::http::Credentials;
use crate::adapters::{VenueSettings, build_exchange};
use crate::config::AppConfig;
use crate::domain::{DecimalString, Order};
use crate::error::ExchangeError;
use crate::ports::Exchange;
use crate::usecases::{
    CancelOrder, FetchMarkets, FetchOrderBook, GetOrder, ListActiveOrders, PlaceOrder,
};

/// Exit status for any failed command. Argument errors exit with 2 (clap).
const FAILURE: u8 = 1;

/// Handle `--info`, `--license` and a missing subcommand.
///
/// Returns `Some(code)` when the process should exit without running a
/// command.
pub fn handle_global_flags(cli: &Cli) -> Option<ExitCode> {
    if cli.info {
        print!("{}", about::build_info());
        return Some(ExitCode::SUCCESS);
    }
    if cli.license {
        print!("{}", about::license_notice());
        return Some(ExitCode::SUCCESS);
    }
    if cli.command.is_none() {
        eprintln!("{}", Cli::command().render_help());
        return Some(ExitCode::from(FAILURE));
    }
    None
}

/// Run the parsed subcommand and report its outcome.
pub async fn run(cli: Cli, config: &AppConfig) -> ExitCode {
    let Some(command) = cli.command else {
        return ExitCode::from(FAILURE);
    };

    let outcome = execute(&command, config).await;
    report(outcome, &mut io::stdout().lock(), &mut io::stderr().lock())
}

/// Write a command outcome: the rendered output to `out`, or the formatted
/// error to `err`. The error body is printed once, not logged.
pub fn report(outcome: Result<String>, out: &mut impl Write, err: &mut impl Write) -> ExitCode {
    match outcome {
        Ok(output) => {
            // A closed stdout (e.g. piped into `head`) is not a command failure.
            let _ = out.write_all(output.as_bytes());
            let _ = out.flush();
            ExitCode::SUCCESS
        }
        Err(failure) => {
            debug!(error = %failure, "Command failed");
            let _ = err.write_all(error_format::render_error(&error_text(&failure)).as_bytes());
            let _ = err.flush();
            ExitCode::from(FAILURE)
        }
    }
}

/// Build the adapter named by the command (or config) and dispatch.
///
/// # Errors
/// Invalid order arguments, an unknown exchange name, or any
/// `ExchangeError` raised by the venue.
pub async fn execute(command: &Command, config: &AppConfig) -> Result<String> {
    // Fail on bad order input before touching the network.
    if let Command::PlaceOrder(args) = command {
        build_order(args)?;
    }

    let name = exchange_name(command, config);
    let credentials = Credentials::from_env(&config.api.api_key_env, &config.api.api_secret_env);
    let settings = venue_settings(config, credentials, command);
    let exchange = build_exchange(name, settings)?;
    debug!(exchange = name, "Exchange adapter ready");

    dispatch(exchange, command).await
}

/// Run one use case against `exchange` and render its result.
///
/// # Errors
/// Invalid order arguments or any `ExchangeError`, passed through as-is.
pub async fn dispatch(exchange: Arc<dyn Exchange>, command: &Command) -> Result<String> {
    let output = match command {
        Command::FetchMarkets(_) => {
            let markets = FetchMarkets::new(exchange).execute().await?;
            display::render_markets(&markets)
        }
        Command::FetchOrderBook(args) => {
            let market = args.market.to_uppercase();
            let book = FetchOrderBook::new(exchange).execute(&market, args.depth).await?;
            display::render_order_book(&book)
        }
        Command::PlaceOrder(args) => {
            let order = build_order(args)?;
            let placed = PlaceOrder::new(exchange).execute(order).await?;
            display::render_orders(&[placed])
        }
        Command::CancelOrder(args) => {
            CancelOrder::new(exchange).execute(&args.order_id).await?;
            display::render_cancel(&args.order_id)
        }
        Command::ListActiveOrders(args) => {
            let market = args.market.as_deref().unwrap_or_default();
            let orders = ListActiveOrders::new(exchange).execute(market).await?;
            display::render_orders(&orders)
        }
        Command::GetOrder(args) => {
            let order = GetOrder::new(exchange).execute(&args.order_id).await?;
            display::render_orders(&[order])
        }
    };
    Ok(output)
}

/// Validate order arguments and build the order to submit.
///
/// Price and quantity must parse as decimals but are sent as typed.
///
/// # Errors
/// Unparsable quantity or price, a limit order without a price, or a
/// market order given one.
pub fn build_order(args: &PlaceOrderArgs) -> Result<Order> {
    validate_decimal("quantity", &args.quantity)?;
    if let Some(price) = &args.price {
        validate_decimal("price", price)?;
    }

    let order = match (args.order_type, &args.price) {
        (OrderKind::Limit, Some(price)) => {
            Order::limit(&args.market, args.side, price.as_str(), args.quantity.as_str())
        }
        (OrderKind::Limit, None) => anyhow::bail!("--price is required for limit orders"),
        (OrderKind::Market, Some(_)) => anyhow::bail!("--price is not accepted for market orders"),
        (OrderKind::Market, None) => {
            Order::market(&args.market, args.side, args.quantity.as_str())
        }
    };
    Ok(order)
}

fn validate_decimal(field: &str, value: &str) -> Result<()> {
    DecimalString::new(value)
        .to_decimal()
        .with_context(|| format!("invalid {field}: {value:?} is not a decimal number"))?;
    Ok(())
}

/// Adapter settings from config, with per-command order overrides.
pub fn venue_settings(
    config: &AppConfig,
    credentials: Credentials,
    command: &Command,
) -> VenueSettings {
    let mut settings = VenueSettings::new(credentials);
    settings.base_url.clone_from(&config.api.base_url);
    settings.timeout = config.api.timeout();
    settings.order_policy = (&config.orders).into();

    if let Command::PlaceOrder(args) = command {
        if let Some(tif) = args.time_in_force {
            settings.order_policy.time_in_force = tif;
        }
        if args.no_post_only {
            settings.order_policy.post_only = false;
        }
    }
    settings
}

fn exchange_name<'a>(command: &'a Command, config: &'a AppConfig) -> &'a str {
    let args: &ExchangeArgs = match command {
        Command::FetchMarkets(args) => args,
        Command::FetchOrderBook(args) => &args.exchange,
        Command::PlaceOrder(args) => &args.exchange,
        Command::CancelOrder(args) | Command::GetOrder(args) => &args.exchange,
        Command::ListActiveOrders(args) => &args.exchange,
    };
    args.exchange.as_deref().unwrap_or(&config.exchange.name)
}

/// Venue errors print as their own message so an embedded JSON body stays
/// intact. Everything else shows its full context chain.
fn error_text(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ExchangeError>() {
        Some(exchange_error) => exchange_error.to_string(),
        None => format!("{err:#}"),
    }
}
