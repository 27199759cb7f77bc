//! Command-Line Interface
//!
//! Argument parsing, dispatch to use cases, and text rendering of results
//! and errors.

pub mod about;
pub mod args;
pub mod display;
pub mod error_format;
pub mod runner;
pub mod table;

pub use args::{Cli, Command};
