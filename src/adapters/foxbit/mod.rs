//! Foxbit REST v3 Venue Adapter
//!
//! Sub-modules:
//! - `adapter`: `Exchange` port implementation
//! - `types`: request/response envelopes

pub mod adapter;
pub mod types;

pub use adapter::FoxbitAdapter;
