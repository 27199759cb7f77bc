//! HTTP Transport - the single network seam
//!
//! `SignedClient` hands a fully prepared request to an `HttpTransport`
//! and gets back status + raw body text. The reqwest implementation
//! applies a fixed timeout and releases the connection on every path.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};

use crate::error::ExchangeResult;

/// A request ready for the wire: signed, encoded, headers attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
  pub method: Method,
  /// Absolute URL including the canonical query string.
  pub url: String,
  pub headers: Vec<(String, String)>,
  /// Exactly the bytes that were signed.
  pub body: Option<Vec<u8>>,
}

impl HttpRequest {
  /// First header value with this name (case-insensitive).
  pub fn header(&self, name: &str) -> Option<&str> {
    self
      .headers
      .iter()
      .find(|(key, _)| key.eq_ignore_ascii_case(name))
      .map(|(_, value)| value.as_str())
  }
}

/// Status and full body text of a venue reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
  pub status: u16,
  pub body: String,
}

/// Sends one request and reads its whole reply.
#[async_trait]
pub trait HttpTransport: Send + Sync {
  /// # Errors
  /// Returns `ExchangeError::Transport` on network, DNS, TLS or timeout
  /// failure. HTTP error statuses are NOT errors at this layer.
  async fn send(&self, request: HttpRequest) -> ExchangeResult<HttpResponse>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
  async fn send(&self, request: HttpRequest) -> ExchangeResult<HttpResponse> {
    (**self).send(request).await
  }
}

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// reqwest-backed transport with a fixed request timeout.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
  http: Client,
}

impl ReqwestTransport {
  /// Create a transport whose requests fail after `timeout`.
  pub fn new(timeout: Duration) -> ExchangeResult<Self> {
    let http = Client::builder()
      .timeout(timeout)
      .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
      .build()?;
    Ok(Self { http })
  }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
  async fn send(&self, request: HttpRequest) -> ExchangeResult<HttpResponse> {
    let mut builder = self.http.request(request.method, &request.url);
    for (name, value) in &request.headers {
      builder = builder.header(name.as_str(), value.as_str());
    }
    if let Some(body) = request.body {
      builder = builder.body(body);
    }

    // The response owns the connection; reading the body to the end or
    // dropping it on an early `?` return hands it back to the pool.
    let response = builder.send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;

    Ok(HttpResponse { status, body })
  }
}
