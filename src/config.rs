//! Configuration management
//!
//! One setting matters: the verification service endpoint. Absent or empty
//! means demo mode (all reports synthesized locally); non-empty means backend
//! mode, in which a configured-but-unreachable service is an error, never a
//! reason to fabricate a verification. The mode is resolved once at startup
//! and threaded through the services rather than re-checked per call.
//!
//! Config is stored at `~/.config/credgate/config.toml`; the
//! `CREDGATE_ENDPOINT` environment variable overrides the file.

use std::fs;

use serde::{Deserialize, Serialize};

use crate::paths;

/// Environment variable overriding the configured endpoint
pub const ENDPOINT_ENV: &str = "CREDGATE_ENDPOINT";

/// Fixed path prefix all backend requests are routed through
pub const API_PREFIX: &str = "/api";

/// Persistent configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Verification service base URL; absent or empty selects demo mode
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl GlobalConfig {
    /// Load config from disk, or default if missing/unreadable
    #[must_use]
    pub fn load() -> Self {
        let path = paths::config_file();
        if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let dir = paths::config_dir();
        fs::create_dir_all(&dir)?;
        let content = toml::to_string_pretty(self)?;
        fs::write(paths::config_file(), content)?;
        Ok(())
    }
}

/// Operating mode, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// No endpoint configured: all reports are synthesized locally
    Demo,
    /// A real verification service is configured at `endpoint`
    Backend {
        /// Service base URL, without trailing slash
        endpoint: String,
    },
}

impl Mode {
    /// Resolve the mode from config and environment
    ///
    /// `CREDGATE_ENDPOINT` wins over the config file; an empty or
    /// whitespace-only value selects demo mode either way.
    #[must_use]
    pub fn resolve(config: &GlobalConfig) -> Self {
        let endpoint = std::env::var(ENDPOINT_ENV)
            .ok()
            .or_else(|| config.endpoint.clone())
            .unwrap_or_default();
        Self::from_endpoint(&endpoint)
    }

    /// Resolve the mode from an endpoint value alone
    #[must_use]
    pub fn from_endpoint(endpoint: &str) -> Self {
        let trimmed = endpoint.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            Self::Demo
        } else {
            Self::Backend {
                endpoint: trimmed.to_string(),
            }
        }
    }

    /// Whether no real verification service is configured
    #[must_use]
    pub const fn is_demo(&self) -> bool {
        matches!(self, Self::Demo)
    }

    /// Full URL for a service path, e.g. `api_url("/posts")`
    ///
    /// Returns `None` in demo mode, where no requests are ever issued.
    #[must_use]
    pub fn api_url(&self, path: &str) -> Option<String> {
        match self {
            Self::Demo => None,
            Self::Backend { endpoint } => Some(format!("{endpoint}{API_PREFIX}{path}")),
        }
    }
}
