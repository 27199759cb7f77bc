//! Decimal values carried as text.
//!
//! Venues quote prices and quantities in arbitrary precision. We never
//! convert them to binary floating point: the exact text received (or typed
//! by the operator) is what gets signed, sent and stored.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price or quantity kept as its original decimal string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecimalString(String);

impl DecimalString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse into an exact decimal. Used for validation and display only;
    /// the text itself is what travels on the wire.
    pub fn to_decimal(&self) -> Result<Decimal, rust_decimal::Error> {
        Decimal::from_str(self.0.trim())
    }
}

impl fmt::Display for DecimalString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DecimalString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for DecimalString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for DecimalString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
