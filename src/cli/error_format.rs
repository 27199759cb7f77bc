//! Rendering of failed commands for stderr.
//!
//! Venue error replies look like
//! `{"error":{"message":"...","code":4,"details":["..."]}}` and reach the CLI
//! embedded in the error text (`status 404: {...}`). When such an object is
//! found it is shown as a table, otherwise the raw text is printed.

use serde::Deserialize;
use serde_json::Value;

use super::table::Table;

#[derive(Debug, Deserialize)]
struct ApiErrorReply {
    error: ApiError,
}

/// Structured error extracted from a venue reply.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    details: Vec<Value>,
}

impl ApiError {
    /// Details as display text; string details are shown unquoted.
    pub fn details(&self) -> Vec<String> {
        self.details
            .iter()
            .map(|d| match d {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            })
            .collect()
    }
}

/// Find and parse the JSON error object starting at the first `{`.
pub fn extract_api_error(raw: &str) -> Option<ApiError> {
    let start = raw.find('{')?;
    serde_json::from_str::<ApiErrorReply>(&raw[start..])
        .ok()
        .map(|reply| reply.error)
}

/// Text to print for a failed command.
pub fn render_error(raw: &str) -> String {
    let Some(error) = extract_api_error(raw) else {
        return format!("{raw}\n");
    };

    let mut table = Table::new(["TYPE", "CODE", "MESSAGE", "DETAIL"]);
    let code = error.code.to_string();
    let details = error.details();
    if details.is_empty() {
        table.push_row(["ERROR", code.as_str(), error.message.as_str(), ""]);
    } else {
        for detail in &details {
            table.push_row(["ERROR", code.as_str(), error.message.as_str(), detail.as_str()]);
        }
    }
    table.render()
}
