//! Table rendering for command results.
//!
//! Values are shown as received, except order book levels: prices get
//! 2 decimals and quantities 8. That rounding is presentation only.

use rust_decimal::RoundingStrategy;

use super::table::Table;
use crate::domain::{DecimalString, Market, Order, OrderBook};

const PRICE_DECIMALS: u32 = 2;
const QUANTITY_DECIMALS: u32 = 8;

/// Round `value` to `decimals` places for display; unparsable input is
/// shown verbatim.
pub fn format_decimal(value: &DecimalString, decimals: u32) -> String {
    match value.to_decimal() {
        Ok(parsed) => {
            let mut rounded =
                parsed.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(decimals);
            rounded.to_string()
        }
        Err(_) => value.to_string(),
    }
}

pub fn render_markets(markets: &[Market]) -> String {
    let mut table = Table::new([
        "SYMBOL",
        "PRICE_MIN",
        "PRICE_INCREMENT",
        "PRICE_PRECISION",
        "QUANTITY_MIN",
        "QUANTITY_INCREMENT",
        "QUANTITY_PRECISION",
    ]);
    for m in markets {
        table.push_row([
            m.symbol.clone(),
            m.price_min.to_string(),
            m.price_increment.to_string(),
            m.price_precision.to_string(),
            m.quantity_min.to_string(),
            m.quantity_increment.to_string(),
            m.quantity_precision.to_string(),
        ]);
    }
    table.render()
}

/// Bids first, then asks, each in venue order.
pub fn render_order_book(book: &OrderBook) -> String {
    let mut table = Table::new(["SIDE", "PRICE", "QUANTITY"]);
    let sides = [("BID", &book.bids), ("ASK", &book.asks)];
    for (label, levels) in sides {
        for level in levels {
            table.push_row([
                label.to_string(),
                format_decimal(level.price(), PRICE_DECIMALS),
                format_decimal(level.quantity(), QUANTITY_DECIMALS),
            ]);
        }
    }
    table.render()
}

pub fn render_orders(orders: &[Order]) -> String {
    let mut table = Table::new(["ID", "MARKET", "SIDE", "TYPE", "PRICE", "QUANTITY", "STATE"]);
    for o in orders {
        table.push_row([
            o.id.clone().unwrap_or_default(),
            o.market_symbol.clone(),
            o.side.to_string(),
            o.order_type.to_string(),
            o.price.as_ref().map(ToString::to_string).unwrap_or_default(),
            o.quantity.as_ref().map(ToString::to_string).unwrap_or_default(),
            o.state.clone().unwrap_or_default(),
        ]);
    }
    table.render()
}

pub fn render_cancel(order_id: &str) -> String {
    let mut table = Table::new(["ORDER_ID", "STATUS"]);
    table.push_row([order_id, "CANCELLED"]);
    table.render()
}
