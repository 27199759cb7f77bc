//! Use Cases Layer - Application Operations
//!
//! One orchestrator per `Exchange` port method. They give the CLI a
//! stable call surface and never depend on a concrete adapter.
//!
//! Use cases:
//! - `FetchMarkets`, `FetchOrderBook`: market data
//! - `PlaceOrder`, `CancelOrder`, `ListActiveOrders`, `GetOrder`: orders

pub mod market_data;
pub mod orders;

pub use market_data::{FetchMarkets, FetchOrderBook};
pub use orders::{CancelOrder, GetOrder, ListActiveOrders, PlaceOrder};
