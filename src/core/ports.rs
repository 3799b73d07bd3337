//! Port traits for external dependencies
//!
//! The services in this crate talk to the remote verification service and to
//! local persistence only through these traits, so the fallback chain can be
//! exercised in tests with in-memory stand-ins.

use thiserror::Error;

use crate::models::{Post, PostMode, VerificationReport};

/// Classified failure of a remote call
///
/// The transport adapter normalizes HTTP and connection-level failures into
/// these variants; services decide per-operation whether a variant is
/// surfaced or recovered from.
#[derive(Debug, Error)]
pub enum ApiFailure {
    /// HTTP 422 - the service could not extract an article from the URL
    #[error("article could not be extracted from the URL")]
    Unprocessable,
    /// Any other non-2xx response
    #[error("service returned HTTP {0}")]
    Status(u16),
    /// Connection refused, timeout, DNS failure, or other transport error
    #[error("transport error: {0}")]
    Transport(String),
    /// 2xx response whose body could not be decoded
    #[error("unreadable response body: {0}")]
    Decode(String),
}

/// Client for the remote verification service
///
/// One method per endpoint, with bodies and status semantics matching the
/// service contract. A 404 on report lookup is a well-defined outcome
/// (`Ok(None)`), not a failure.
pub trait RemoteApi {
    /// `POST /verifyArticle` with `{url, comment}`
    fn verify_article(
        &self,
        url: &str,
        comment: Option<&str>,
    ) -> Result<VerificationReport, ApiFailure>;

    /// `POST /posts` with `{verification_id, post_mode}`
    fn create_post(&self, verification_id: &str, mode: PostMode) -> Result<Post, ApiFailure>;

    /// `GET /posts` - the authoritative, server-ordered feed
    fn fetch_posts(&self) -> Result<Vec<Post>, ApiFailure>;

    /// `GET /reports/{verification_id}`; 404 maps to `Ok(None)`
    fn fetch_report(&self, verification_id: &str)
    -> Result<Option<VerificationReport>, ApiFailure>;

    /// `DELETE /posts` - clears the server-side feed
    fn clear_posts(&self) -> Result<(), ApiFailure>;
}

/// Errors raised by key-value store adapters
///
/// These never escape the `LocalStore` façade: reads that fail are treated as
/// absent, writes that fail are logged and dropped.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored value was not valid JSON for the expected type
    #[error("corrupt record: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Session-scoped key-value persistence
///
/// Values are opaque strings (JSON-encoded by the caller). Implementations
/// are accessed single-threaded; each operation is an atomic
/// read-modify-write per key.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, overwriting any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the value stored under `key`, if any
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// List all keys currently present
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}
