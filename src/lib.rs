//! credgate - a client-side credibility gate for article links shared to a
//! feed
//!
//! This library verifies an article link against a remote verification
//! service before it is published, derives the permitted publication actions
//! from the verdict, and keeps the feed usable when the service is
//! unreachable through a layered fallback: remote call, then local cache,
//! then synthesized data (demo mode only).

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod mock;
pub mod models;
pub mod output;
pub mod paths;
pub mod store;
