//! Signed REST Request Pipeline
//!
//! Venue-neutral machinery for authenticated JSON-over-HTTP calls.
//!
//! Sub-modules:
//! - `auth`: credentials and HMAC-SHA256 signing
//! - `request`: logical request, canonical query, path escaping
//! - `client`: timestamping, signing, sending, decoding
//! - `transport`: network seam (reqwest implementation)

pub mod auth;
pub mod client;
pub mod request;
pub mod transport;

pub use auth::{AuthHeaderNames, Credentials};
pub use client::SignedClient;
pub use request::{SignedRequest, escape_path_segment};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
