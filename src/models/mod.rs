//! Data models for credgate
//!
//! Core abstractions:
//! - `VerificationReport`: what the verification service says about one article
//! - `Decision`: the three-valued publication verdict (ALLOW / WARN / BLOCK)
//! - `Post`: a published feed entry snapshotted from exactly one report

pub mod post;
pub mod report;

pub use post::{Post, PostMode};
pub use report::{Article, Claim, Decision, Evidence, Stance, VerificationReport, Verdict};
