//! Signed request description.
//!
//! A `SignedRequest` is the logical call: method, escaped path, query
//! parameters and an optional JSON body. The body is serialized once,
//! when attached, so the signed bytes and the sent bytes are the same
//! buffer.

use std::collections::BTreeMap;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Method;
use serde::Serialize;
use url::form_urlencoded;

use crate::error::{ExchangeError, ExchangeResult};

/// Everything except RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-escape an opaque value (symbol, id) for use as one path segment.
///
/// # Errors
/// Returns `ExchangeError::InvalidRequest` for `""`, `"."` and `".."`. URL
/// parsing collapses those segments (escaped or not), so the request would
/// reach a different path than the one signed.
pub fn escape_path_segment(segment: &str) -> ExchangeResult<String> {
    if matches!(segment, "" | "." | "..") {
        return Err(ExchangeError::InvalidRequest(format!(
            "{segment:?} is not a valid path segment"
        )));
    }
    Ok(utf8_percent_encode(segment, PATH_SEGMENT).to_string())
}

/// A logical venue call, before timestamping and signing.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    method: Method,
    path: String,
    /// Sorted by key, which makes the encoded query canonical.
    query: BTreeMap<String, String>,
    body: Option<Vec<u8>>,
}

impl SignedRequest {
    /// `path` must already be escaped (see [`escape_path_segment`]).
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: BTreeMap::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Add a query parameter. A repeated key replaces the earlier value.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.insert(key.into(), value.to_string());
        self
    }

    /// Add a query parameter only when `value` is non-empty.
    #[must_use]
    pub fn query_if_present(self, key: impl Into<String>, value: &str) -> Self {
        if value.is_empty() {
            self
        } else {
            self.query(key, value)
        }
    }

    /// Serialize `body` to compact JSON and attach it.
    ///
    /// # Errors
    /// Returns `ExchangeError::Serialization` if `body` cannot be encoded.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> ExchangeResult<Self> {
        let bytes = serde_json::to_vec(body).map_err(ExchangeError::Serialization)?;
        self.body = Some(bytes);
        Ok(self)
    }

    pub const fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// `application/x-www-form-urlencoded` query with keys in
    /// lexicographic order; empty when there are no parameters.
    pub fn canonical_query(&self) -> String {
        if self.query.is_empty() {
            return String::new();
        }
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde::ser::Error as _;

    use super::*;

    #[test]
    fn test_canonical_query_sorts_keys() {
        let req = SignedRequest::get("/rest/v3/orders")
            .query("state", "ACTIVE")
            .query("market_symbol", "btcbrl");
        assert_eq!(req.canonical_query(), "market_symbol=btcbrl&state=ACTIVE");
    }

    #[test]
    fn test_canonical_query_is_empty_without_params() {
        assert_eq!(SignedRequest::get("/x").canonical_query(), "");
    }

    #[test]
    fn test_query_values_are_percent_encoded() {
        let req = SignedRequest::get("/x").query("note", "a b&c=d");
        assert_eq!(req.canonical_query(), "note=a+b%26c%3Dd");
    }

    #[test]
    fn test_empty_optional_filter_is_omitted() {
        let req = SignedRequest::get("/x")
            .query("state", "ACTIVE")
            .query_if_present("market_symbol", "");
        assert_eq!(req.canonical_query(), "state=ACTIVE");
    }

    #[test]
    fn test_path_segment_escaping() {
        assert_eq!(escape_path_segment("BTCBRL").unwrap(), "BTCBRL");
        assert_eq!(escape_path_segment("BTC/BRL").unwrap(), "BTC%2FBRL");
        assert_eq!(escape_path_segment("a b?c#d").unwrap(), "a%20b%3Fc%23d");
        assert_eq!(escape_path_segment("id-1_2.3~").unwrap(), "id-1_2.3~");
        assert_eq!(escape_path_segment("...").unwrap(), "...");
    }

    #[test]
    fn test_dot_and_empty_segments_are_rejected() {
        for segment in ["", ".", ".."] {
            let err = escape_path_segment(segment).unwrap_err();
            assert!(matches!(err, ExchangeError::InvalidRequest(_)), "{segment:?}");
        }
    }

    #[test]
    fn test_json_body_is_compact() {
        let mut body = HashMap::new();
        body.insert("id", "xyz");
        let req = SignedRequest::put("/cancel").json(&body).unwrap();
        assert_eq!(req.body().unwrap(), br#"{"id":"xyz"}"#);
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("cannot encode"))
        }
    }

    #[test]
    fn test_unserializable_body_is_serialization_error() {
        let err = SignedRequest::post("/x").json(&Unserializable).unwrap_err();
        assert!(matches!(err, ExchangeError::Serialization(_)));
    }
}
