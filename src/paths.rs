//! Centralized path definitions for credgate
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.config/credgate/
//! └── config.toml          # endpoint setting (absent/empty = demo mode)
//!
//! ~/.local/share/credgate/
//! └── store.json           # local store: feed cache + cached reports
//! ```

use std::path::PathBuf;

/// Application directory name under the XDG config/data roots
const APP_DIR: &str = "credgate";

/// Configuration filename
const CONFIG_FILE: &str = "config.toml";

/// Local store filename
const STORE_FILE: &str = "store.json";

/// Global config directory (`~/.config/credgate`)
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

/// Global config file path
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Data directory for the local store (`~/.local/share/credgate`)
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

/// Local store file path
#[must_use]
pub fn store_file() -> PathBuf {
    data_dir().join(STORE_FILE)
}
