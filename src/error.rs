//! Error taxonomy for the publication gate
//!
//! Three user-relevant failure classes with distinct handling:
//! - `UnprocessableArticle` is a content problem; it is surfaced as-is and
//!   never retried or substituted.
//! - `ServiceUnavailable` is an availability problem; operations with a
//!   fallback policy recover locally, `verify` surfaces it with remediation.
//! - `InvalidPublicationMode` is a contract violation by the caller; fatal.
//!
//! `ReportNotFound` is the id-lookup chain bottoming out; it only arises on
//! the id-only entry points.
//!
//! Local persistence failures (`StoreError`) are deliberately not part of
//! this taxonomy: the store swallows them and degrades to empty results.

use thiserror::Error;

use crate::models::{Decision, PostMode};

/// Errors surfaced by the gate's operations
#[derive(Debug, Error)]
pub enum GateError {
    /// The service could not extract an article from the submitted URL.
    /// The user must supply a different link; never retried automatically.
    #[error("could not extract an article from this URL; try a different link")]
    UnprocessableArticle,

    /// The remote verification service is unreachable or failing.
    /// `guidance` names the endpoint and the setting to check.
    #[error("cannot reach the verification service: {guidance}")]
    ServiceUnavailable {
        /// Operator-facing remediation
        guidance: String,
    },

    /// A publication was attempted with a mode the report's decision does
    /// not permit. This is a programming error, not user-recoverable.
    #[error("post mode '{mode}' is not permitted for decision {decision}")]
    InvalidPublicationMode {
        /// The report's decision
        decision: Decision,
        /// The rejected mode
        mode: PostMode,
    },

    /// A report lookup found nothing at any level of the fallback chain
    #[error("no verification report found for '{0}'")]
    ReportNotFound(String),
}
