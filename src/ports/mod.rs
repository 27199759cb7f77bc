//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the use-case layer requires from
//! the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `Exchange`: Market data and order management on a trading venue

pub mod exchange;

pub use exchange::Exchange;
