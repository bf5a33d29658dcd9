// SPDX-License-Identifier: MIT

//! Engine configuration loaded from environment variables.
//!
//! Everything has a sensible default so embedders can construct the engine
//! without any environment setup.

use std::env;
use std::path::PathBuf;

/// Backup engine configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Application version recorded in every snapshot manifest.
    pub app_version: String,
    /// Scratch directory where snapshot files are written.
    pub export_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            export_dir: env::temp_dir(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `TRAILBOOK_APP_VERSION` overrides the version stamped into snapshots;
    /// `TRAILBOOK_EXPORT_DIR` overrides the scratch directory.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            app_version: env::var("TRAILBOOK_APP_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
            export_dir: env::var("TRAILBOOK_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| env::temp_dir()),
        }
    }
}
