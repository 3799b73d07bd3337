//! Sourced values - distinguishing live data from degraded-source data
//!
//! Every read or write path with a fallback returns a `Sourced<T>` so that
//! callers (and tests) can tell whether a value came from the authoritative
//! remote service or from a degraded source, without guessing from field
//! contents.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A value tagged with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sourced<T> {
    /// From the remote service (authoritative)
    Live(T),
    /// Reconstructed from the local store after a remote failure
    Local(T),
    /// Produced by the mock synthesizer (demo mode, or last-resort fallback)
    Synthesized(T),
}

impl<T> Sourced<T> {
    /// Unwrap the value, discarding the source tag
    pub fn into_inner(self) -> T {
        match self {
            Self::Live(v) | Self::Local(v) | Self::Synthesized(v) => v,
        }
    }

    /// Borrow the value regardless of source
    pub const fn get(&self) -> &T {
        match self {
            Self::Live(v) | Self::Local(v) | Self::Synthesized(v) => v,
        }
    }

    /// Whether the value came from the authoritative remote service
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }

    /// Short label for the source, for user-facing degradation notices
    #[must_use]
    pub const fn source_label(&self) -> &'static str {
        match self {
            Self::Live(_) => "live",
            Self::Local(_) => "local cache",
            Self::Synthesized(_) => "synthesized",
        }
    }
}

/// Cooperative cancellation flag for lookups tied to a view
///
/// There is no true interruption: the underlying call runs to completion, and
/// the flag is checked after resolution so that a view torn down mid-flight
/// never has state applied to it.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a fresh, uncancelled token
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the owning view as torn down
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether the owning view has been torn down
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
