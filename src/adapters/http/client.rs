//! Signed HTTP Client - authenticated REST requests
//!
//! Turns a `SignedRequest` into a timestamped, HMAC-signed HTTP call,
//! sends it once (no retries), and optionally decodes the JSON reply.

use std::time::Instant;

use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::auth::{self, AuthHeaderNames, Credentials};
use super::request::SignedRequest;
use super::transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
use crate::error::{ExchangeError, ExchangeResult};

/// Client that signs every request with the venue's HMAC scheme.
#[derive(Debug)]
pub struct SignedClient<T = ReqwestTransport> {
  /// Network seam.
  transport: T,
  /// API key + secret.
  credentials: Credentials,
  /// Scheme + host (+ optional prefix), without trailing slash.
  base_url: String,
  /// Venue-specific auth header names.
  headers: AuthHeaderNames,
}

impl<T: HttpTransport> SignedClient<T> {
  /// Create a new signed client.
  pub fn new(
    transport: T,
    credentials: Credentials,
    base_url: impl Into<String>,
    headers: AuthHeaderNames,
  ) -> Self {
    let base_url = base_url.into().trim_end_matches('/').to_string();
    Self {
      transport,
      credentials,
      base_url,
      headers,
    }
  }

  /// Build the exact wire request for `request` at `timestamp_ms`.
  ///
  /// Pure: the same request and timestamp always give the same URL,
  /// headers, signature and body. The timestamp string placed in the
  /// header is the one that was signed.
  pub fn prepare(&self, request: &SignedRequest, timestamp_ms: i64) -> HttpRequest {
    let timestamp = timestamp_ms.to_string();
    let query = request.canonical_query();
    let body = request.body().unwrap_or_default();

    let message = auth::prehash(
      &timestamp,
      request.method().as_str(),
      request.path(),
      &query,
      body,
    );
    let signature = self.credentials.sign(&message);

    let mut url = format!("{}{}", self.base_url, request.path());
    if !query.is_empty() {
      url.push('?');
      url.push_str(&query);
    }

    HttpRequest {
      method: request.method().clone(),
      url,
      headers: vec![
        (CONTENT_TYPE.as_str().to_string(), "application/json".to_string()),
        (self.headers.api_key.to_string(), self.credentials.api_key().to_string()),
        (self.headers.timestamp.to_string(), timestamp),
        (self.headers.signature.to_string(), signature),
      ],
      body: request.body().map(<[u8]>::to_vec),
    }
  }

  /// Sign and send `request`, returning the raw reply.
  ///
  /// The clock is read once, right before sending; signatures are never
  /// computed ahead of time or reused.
  ///
  /// # Errors
  /// - `Transport` if the request could not be sent or read
  /// - `Http` if the venue answered with status >= 400 (body kept verbatim)
  pub async fn execute(&self, request: SignedRequest) -> ExchangeResult<HttpResponse> {
    let started = Instant::now();
    let prepared = self.prepare(&request, auth::timestamp_ms());
    let response = self.transport.send(prepared).await?;

    debug!(
      method = %request.method(),
      path = request.path(),
      status = response.status,
      elapsed_ms = started.elapsed().as_millis() as u64,
      "Venue request completed"
    );

    if response.status >= 400 {
      warn!(
        method = %request.method(),
        path = request.path(),
        status = response.status,
        "Venue returned error status"
      );
      return Err(ExchangeError::Http {
        status: response.status,
        body: response.body,
      });
    }

    Ok(response)
  }

  /// Send `request` and discard the reply body.
  pub async fn send(&self, request: SignedRequest) -> ExchangeResult<()> {
    self.execute(request).await.map(|_| ())
  }

  /// Send `request` and decode the JSON reply into `R`.
  ///
  /// # Errors
  /// Everything `execute` returns, plus `Decode` if the body does not
  /// parse as `R`.
  pub async fn send_json<R: DeserializeOwned>(&self, request: SignedRequest) -> ExchangeResult<R> {
    let response = self.execute(request).await?;
    let decoded = serde_json::from_str::<R>(&response.body);
    decoded.map_err(|source| ExchangeError::Decode {
      source,
      body: response.body,
    })
  }
}
