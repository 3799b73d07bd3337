//! Verification client
//!
//! Requests a verification judgment for a URL. The fallback policy here is
//! the strictest in the crate: once a backend is configured, a failure is a
//! failure. Substituting a synthesized report for a configured-but-unreachable
//! service would misrepresent a real verification as having occurred; the
//! synthesizer is reachable only in demo mode, where no real verification was
//! ever promised.

use super::{Remote, unreachable_guidance};
use crate::core::ports::ApiFailure;
use crate::error::GateError;
use crate::mock;
use crate::models::VerificationReport;
use crate::store::LocalStore;

/// Issues verification requests and caches the results
#[derive(Debug, Clone, Copy)]
pub struct Verifier<'a> {
    remote: &'a Remote<'a>,
    store: &'a LocalStore<'a>,
}

impl<'a> Verifier<'a> {
    /// Create a verifier over the resolved remote side and the local store
    #[must_use]
    pub const fn new(remote: &'a Remote<'a>, store: &'a LocalStore<'a>) -> Self {
        Self { remote, store }
    }

    /// Request a verification judgment for `url`
    ///
    /// `url` must be non-empty (enforced at the CLI boundary). On success the
    /// report is cached under its `verification_id` before being returned, so
    /// later lookups need no second remote call.
    ///
    /// # Errors
    ///
    /// `UnprocessableArticle` when the service cannot extract an article from
    /// the URL (a content problem; not retried, no fallback), or
    /// `ServiceUnavailable` for any other remote failure.
    pub fn verify(
        &self,
        url: &str,
        comment: Option<&str>,
    ) -> Result<VerificationReport, GateError> {
        match self.remote {
            Remote::Demo => {
                let report = mock::synthesize(url);
                log::debug!("demo mode: synthesized report {}", report.verification_id);
                self.store.save_report(&report);
                Ok(report)
            },
            Remote::Backend { endpoint, api } => match api.verify_article(url, comment) {
                Ok(report) => {
                    self.store.save_report(&report);
                    Ok(report)
                },
                Err(ApiFailure::Unprocessable) => Err(GateError::UnprocessableArticle),
                Err(failure) => Err(GateError::ServiceUnavailable {
                    guidance: unreachable_guidance(endpoint, &failure),
                }),
            },
        }
    }
}
