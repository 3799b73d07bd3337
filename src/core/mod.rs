//! Core domain logic for credgate
//!
//! This module contains the publication gate and the fallback orchestration,
//! with no direct I/O. All external interactions (the remote verification
//! service, local persistence) are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `policy` - the decision → permitted-post-modes gate (pure)
//! - `sourced` - tagging values as live vs. degraded-source data
//! - `ids` - session-unique id generation
//! - `ports` - trait definitions for external dependencies
//! - `services` - orchestration (verify, publish, feed, report lookup)

pub mod ids;
pub mod policy;
pub mod ports;
pub mod services;
pub mod sourced;
