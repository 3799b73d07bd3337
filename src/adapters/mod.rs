//! I/O adapters implementing the core port traits
//!
//! - `http` - reqwest-backed client for the remote verification service
//! - `file_store` - JSON-file key-value store (the durable local store)
//! - `memory` - in-memory key-value store (tests, throwaway sessions)

pub mod file_store;
pub mod http;
pub mod memory;

pub use file_store::FileStore;
pub use http::HttpApi;
pub use memory::MemoryStore;
