//! Orchestration services
//!
//! One service per operation family, each built from the same three
//! ingredients: the resolved remote side, the local store, and the decision
//! policy. Fallback policy differs per operation and is documented on each
//! service:
//!
//! - `Verifier` - verify a URL; surfaces failures, never silently mocks
//! - `Publisher` - create a post; recovers locally, never hard-fails on
//!   availability
//! - `Feed` - list/reset the feed; reads recover locally
//! - `Reports` - look up a report; remote, then cache, then mock templates

pub mod feed;
pub mod publisher;
pub mod reports;
pub mod verifier;

pub use feed::Feed;
pub use publisher::Publisher;
pub use reports::Reports;
pub use verifier::Verifier;

use crate::core::ports::{ApiFailure, RemoteApi};

/// The remote side of the system, as resolved once at startup
///
/// Pairs the operating mode with its transport so a backend can never be
/// half-configured: demo mode has no transport at all, backend mode always
/// has one.
#[derive(Clone, Copy)]
pub enum Remote<'a> {
    /// No verification service configured; reports are synthesized
    Demo,
    /// A real service is configured and must be used
    Backend {
        /// Endpoint base, kept for operator-facing error guidance
        endpoint: &'a str,
        /// Transport for the service
        api: &'a dyn RemoteApi,
    },
}

impl std::fmt::Debug for Remote<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Demo => write!(f, "Remote::Demo"),
            Self::Backend { endpoint, .. } => {
                f.debug_struct("Remote::Backend").field("endpoint", endpoint).finish()
            },
        }
    }
}

/// Operator-facing remediation for an unreachable service
pub(crate) fn unreachable_guidance(endpoint: &str, failure: &ApiFailure) -> String {
    format!(
        "{failure}. Ensure the verification service is running at {endpoint}, and that \
         `endpoint` in ~/.config/credgate/config.toml (or CREDGATE_ENDPOINT) points at it; \
         clear the setting to run in demo mode"
    )
}
