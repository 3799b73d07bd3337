//! Feed reader
//!
//! Retrieves the list of published posts. Successful remote reads are
//! authoritative and are mirrored into the local cache; failed reads fall
//! back to the cache, which stays in most-recent-first order through the
//! publisher's local writes and the mirroring here.

use super::{Remote, unreachable_guidance};
use crate::core::sourced::Sourced;
use crate::error::GateError;
use crate::models::Post;
use crate::store::LocalStore;

/// Reads and resets the feed of published posts
#[derive(Debug, Clone, Copy)]
pub struct Feed<'a> {
    remote: &'a Remote<'a>,
    store: &'a LocalStore<'a>,
}

impl<'a> Feed<'a> {
    /// Create a feed reader over the resolved remote side and the local store
    #[must_use]
    pub const fn new(remote: &'a Remote<'a>, store: &'a LocalStore<'a>) -> Self {
        Self { remote, store }
    }

    /// List published posts, most-recent-first
    ///
    /// Never fails: a remote failure degrades to the cached feed, tagged
    /// `Local`.
    #[must_use]
    pub fn list(&self) -> Sourced<Vec<Post>> {
        match self.remote {
            Remote::Demo => Sourced::Local(self.store.posts()),
            Remote::Backend { api, .. } => match api.fetch_posts() {
                Ok(posts) => {
                    self.store.replace_posts(&posts);
                    Sourced::Live(posts)
                },
                Err(failure) => {
                    log::warn!("feed fetch failed, serving local cache: {failure}");
                    Sourced::Local(self.store.posts())
                },
            },
        }
    }

    /// Clear the feed, server-side first in backend mode, then locally
    ///
    /// # Errors
    ///
    /// `ServiceUnavailable` when the server-side clear fails; the local cache
    /// is left untouched in that case so the two sides do not diverge.
    pub fn reset(&self) -> Result<(), GateError> {
        if let Remote::Backend { endpoint, api } = self.remote {
            api.clear_posts().map_err(|failure| GateError::ServiceUnavailable {
                guidance: unreachable_guidance(endpoint, &failure),
            })?;
        }
        self.store.clear_posts();
        Ok(())
    }
}
