//! Local store - session persistence for the feed and cached reports
//!
//! `LocalStore` owns the key layout and the degradation policy over a
//! [`KeyValueStore`] adapter: the feed of published posts lives under one
//! fixed key, each cached report under a key namespaced by its
//! `verification_id`. Persistence failures never crash a flow — failed reads
//! are logged and treated as absent, failed writes are logged and dropped.

use crate::core::ports::KeyValueStore;
use crate::models::{Post, VerificationReport};

/// Key holding the list of published posts, most-recent-first
const FEED_KEY: &str = "feed";

/// Key prefix for cached reports
const REPORT_KEY_PREFIX: &str = "report/";

/// Persistence façade over a key-value adapter
#[derive(Clone, Copy)]
pub struct LocalStore<'a> {
    kv: &'a dyn KeyValueStore,
}

impl std::fmt::Debug for LocalStore<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalStore").finish_non_exhaustive()
    }
}

impl<'a> LocalStore<'a> {
    /// Create a store over the given key-value adapter
    #[must_use]
    pub const fn new(kv: &'a dyn KeyValueStore) -> Self {
        Self { kv }
    }

    fn report_key(verification_id: &str) -> String {
        format!("{REPORT_KEY_PREFIX}{verification_id}")
    }

    /// Cache a report under its `verification_id`
    pub fn save_report(&self, report: &VerificationReport) {
        let key = Self::report_key(&report.verification_id);
        match serde_json::to_string(report) {
            Ok(json) => {
                if let Err(e) = self.kv.set(&key, &json) {
                    log::warn!("failed to cache report {key}: {e}");
                }
            },
            Err(e) => log::warn!("failed to encode report {key}: {e}"),
        }
    }

    /// Look up a cached report by `verification_id`
    #[must_use]
    pub fn report(&self, verification_id: &str) -> Option<VerificationReport> {
        let key = Self::report_key(verification_id);
        match self.kv.get(&key) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(report) => Some(report),
                Err(e) => {
                    log::warn!("corrupt cached report {key}: {e}");
                    None
                },
            },
            Ok(None) => None,
            Err(e) => {
                log::warn!("failed to read cached report {key}: {e}");
                None
            },
        }
    }

    /// The cached feed, most-recent-first; empty on any read failure
    #[must_use]
    pub fn posts(&self) -> Vec<Post> {
        match self.kv.get(FEED_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(posts) => posts,
                Err(e) => {
                    log::warn!("corrupt feed cache: {e}");
                    Vec::new()
                },
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("failed to read feed cache: {e}");
                Vec::new()
            },
        }
    }

    /// Prepend a post to the cached feed (most-recent-first order)
    pub fn push_post(&self, post: &Post) {
        let mut posts = self.posts();
        posts.insert(0, post.clone());
        self.write_posts(&posts);
    }

    /// Replace the cached feed with the server-ordered list
    pub fn replace_posts(&self, posts: &[Post]) {
        self.write_posts(posts);
    }

    /// Drop the cached feed entirely
    pub fn clear_posts(&self) {
        if let Err(e) = self.kv.remove(FEED_KEY) {
            log::warn!("failed to clear feed cache: {e}");
        }
    }

    fn write_posts(&self, posts: &[Post]) {
        match serde_json::to_string(posts) {
            Ok(json) => {
                if let Err(e) = self.kv.set(FEED_KEY, &json) {
                    log::warn!("failed to write feed cache: {e}");
                }
            },
            Err(e) => log::warn!("failed to encode feed cache: {e}"),
        }
    }
}
