//! Report lookup
//!
//! Resolves a `verification_id` to its report through the full fallback
//! chain: remote first (backend mode only), then the local cache, then the
//! mock templates for ids carrying a known mock prefix — so links to
//! demo-mode reports stay resolvable after a restart.

use super::Remote;
use crate::core::sourced::{CancelToken, Sourced};
use crate::mock;
use crate::models::VerificationReport;
use crate::store::LocalStore;

/// Looks up verification reports by id
#[derive(Debug, Clone, Copy)]
pub struct Reports<'a> {
    remote: &'a Remote<'a>,
    store: &'a LocalStore<'a>,
}

impl<'a> Reports<'a> {
    /// Create a lookup service over the resolved remote side and the store
    #[must_use]
    pub const fn new(remote: &'a Remote<'a>, store: &'a LocalStore<'a>) -> Self {
        Self { remote, store }
    }

    /// Resolve `verification_id` through the fallback chain
    ///
    /// A remote 404 and a remote failure both continue down the chain; only
    /// a chain that bottoms out returns `None`.
    #[must_use]
    pub fn get(&self, verification_id: &str) -> Option<Sourced<VerificationReport>> {
        if let Remote::Backend { api, .. } = self.remote {
            match api.fetch_report(verification_id) {
                Ok(Some(report)) => return Some(Sourced::Live(report)),
                Ok(None) => log::debug!("report {verification_id} not on server"),
                Err(failure) => {
                    log::warn!("report fetch failed, trying local cache: {failure}");
                },
            }
        }

        if let Some(report) = self.store.report(verification_id) {
            return Some(Sourced::Local(report));
        }

        mock::template_for_id(verification_id).map(Sourced::Synthesized)
    }

    /// Resolve a report for a view that may be torn down mid-flight
    ///
    /// The lookup runs to completion either way; if `token` was cancelled by
    /// the time it resolves, the result is discarded and `None` is returned
    /// so no state is applied to an abandoned view.
    #[must_use]
    pub fn get_unless_cancelled(
        &self,
        verification_id: &str,
        token: &CancelToken,
    ) -> Option<Sourced<VerificationReport>> {
        let resolved = self.get(verification_id);
        if token.is_cancelled() { None } else { resolved }
    }
}
