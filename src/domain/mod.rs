//! Domain layer - exchange-neutral value types.
//!
//! Markets, orders and order books as plain data. No I/O and no venue
//! knowledge lives here (hexagonal architecture inner ring). Prices and
//! quantities are decimal strings end to end.

pub mod decimal;
pub mod market;
pub mod order;
pub mod order_book;

// Re-export core types for convenience
pub use decimal::DecimalString;
pub use market::{Market, MarketSymbol};
pub use order::{Order, OrderId, OrderSide, OrderType, TimeInForce};
pub use order_book::{OrderBook, PriceLevel};
