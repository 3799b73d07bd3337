//! Post gateway
//!
//! Creates a published post from a verification report and a chosen mode.
//! The gate is re-validated here regardless of what the caller already
//! checked; past the gate, a publish never hard-fails for availability
//! reasons — if the remote write path is down, the post is constructed
//! locally so the user's action still visibly succeeds, at the cost of
//! eventual-consistency risk.

use super::{Remote, Reports};
use crate::core::sourced::Sourced;
use crate::core::{ids, policy};
use crate::error::GateError;
use crate::models::{Post, PostMode, VerificationReport};
use crate::store::LocalStore;

/// Creates posts from verification reports, honoring the decision policy
#[derive(Debug, Clone, Copy)]
pub struct Publisher<'a> {
    remote: &'a Remote<'a>,
    store: &'a LocalStore<'a>,
}

impl<'a> Publisher<'a> {
    /// Create a publisher over the resolved remote side and the local store
    #[must_use]
    pub const fn new(remote: &'a Remote<'a>, store: &'a LocalStore<'a>) -> Self {
        Self { remote, store }
    }

    /// Publish a post for `report` in `mode`
    ///
    /// On remote success the server-assigned post is mirrored into the local
    /// feed cache and returned as `Live`. On any remote failure the post is
    /// constructed locally — snapshotted from the cached report for this
    /// `verification_id` if present, else from `report` itself — with a
    /// `local-` prefixed id, written to the feed cache, and returned as
    /// `Local`.
    ///
    /// # Errors
    ///
    /// `InvalidPublicationMode` when `mode` is not permitted for the report's
    /// decision. No post is created in that case.
    pub fn publish(
        &self,
        report: &VerificationReport,
        mode: PostMode,
    ) -> Result<Sourced<Post>, GateError> {
        if !policy::is_permitted(report.decision, mode) {
            return Err(GateError::InvalidPublicationMode {
                decision: report.decision,
                mode,
            });
        }

        if let Remote::Backend { api, .. } = self.remote {
            match api.create_post(&report.verification_id, mode) {
                Ok(post) => {
                    self.store.push_post(&post);
                    return Ok(Sourced::Live(post));
                },
                Err(failure) => {
                    log::warn!(
                        "post creation failed for {}, constructing locally: {failure}",
                        report.verification_id
                    );
                },
            }
        }

        let source = self.store.report(&report.verification_id);
        let post = Post::from_report(
            source.as_ref().unwrap_or(report),
            mode,
            ids::unique_id(ids::LOCAL_POST_PREFIX),
        );
        self.store.push_post(&post);
        Ok(Sourced::Local(post))
    }

    /// Resolve a report by id through the lookup chain, then publish
    ///
    /// This is the id-only entry point: the report is resolved remote-first,
    /// then from the cache, then — as a last resort — from the mock templates
    /// when the id carries a known mock prefix.
    ///
    /// # Errors
    ///
    /// `ReportNotFound` when the chain resolves nothing, or any error
    /// [`Self::publish`] returns.
    pub fn publish_by_id(
        &self,
        verification_id: &str,
        mode: PostMode,
    ) -> Result<Sourced<Post>, GateError> {
        let report = Reports::new(self.remote, self.store)
            .get(verification_id)
            .ok_or_else(|| GateError::ReportNotFound(verification_id.to_string()))?;
        self.publish(report.get(), mode)
    }
}
