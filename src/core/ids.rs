//! Session-unique id generation
//!
//! Client-generated ids (mock report ids, locally constructed post ids) carry
//! a classifiable prefix, a millisecond timestamp, and a process-wide counter
//! so two ids minted in the same millisecond never collide within a session.

use std::sync::atomic::{AtomicU64, Ordering};

static SEQ: AtomicU64 = AtomicU64::new(0);

/// Prefix for posts constructed locally after a remote failure; distinct
/// from server-assigned post ids.
pub const LOCAL_POST_PREFIX: &str = "local";

/// Mint a session-unique id with the given prefix
#[must_use]
pub fn unique_id(prefix: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let seq = SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{millis}-{seq}")
}
