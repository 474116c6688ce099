//! Project configuration
//!
//! Loaded from an optional `folio.toml` next to the project. A missing file
//! means defaults; a malformed one is logged and ignored rather than
//! blocking the build.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::paths;

/// Project configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,
    /// Preview server settings
    #[serde(default)]
    pub serve: ServeConfig,
}

/// Build settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Output directory for rendered artifacts
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
}

fn default_out_dir() -> String {
    paths::DEFAULT_OUT_DIR.to_string()
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
        }
    }
}

/// Preview server settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServeConfig {
    /// Port the preview server binds to
    #[serde(default = "default_port")]
    pub port: u16,
    /// Whether to open the browser after the server starts
    #[serde(default)]
    pub open: bool,
}

const fn default_port() -> u16 {
    8080
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            open: false,
        }
    }
}

impl SiteConfig {
    /// Load config from `folio.toml` under `root`
    ///
    /// Missing file yields defaults. An unreadable or malformed file is
    /// logged as a warning and also yields defaults.
    #[must_use]
    pub fn load(root: &Path) -> Self {
        let path = paths::config_path(root);
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(err) => {
                    log::warn!("ignoring malformed {}: {err}", paths::CONFIG_FILE);
                    Self::default()
                },
            },
            Err(err) => {
                log::warn!("cannot read {}: {err}", paths::CONFIG_FILE);
                Self::default()
            },
        }
    }
}
