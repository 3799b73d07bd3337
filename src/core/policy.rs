//! Decision policy - maps a report's decision to permitted publication modes
//!
//! This is the gate itself: pure, total over the `Decision` enum, and the
//! single source of truth for what a verdict allows. Unrecognized decision
//! values cannot reach this point — they are rejected when the report is
//! deserialized.

use crate::models::{Decision, PostMode};

/// Publication modes permitted for a decision
///
/// | decision | permitted modes   |
/// |----------|-------------------|
/// | ALLOW    | `normal`          |
/// | WARN     | `warning_label`   |
/// | BLOCK    | none              |
#[must_use]
pub const fn permitted_modes(decision: Decision) -> &'static [PostMode] {
    match decision {
        Decision::Allow => &[PostMode::Normal],
        Decision::Warn => &[PostMode::WarningLabel],
        Decision::Block => &[],
    }
}

/// Whether `mode` is a permitted publication mode for `decision`
#[must_use]
pub fn is_permitted(decision: Decision, mode: PostMode) -> bool {
    permitted_modes(decision).contains(&mode)
}
