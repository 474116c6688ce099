//! Centralized path definitions for folio
//!
//! Single source of truth for every filesystem name the tool reads or
//! writes.
//!
//! ## Project Layout
//!
//! ```text
//! project/
//! ├── folio.toml          # Optional config (missing = defaults)
//! ├── assets/             # Images copied into the build as-is
//! │   ├── profile.jpg
//! │   └── user-2.jpeg
//! └── dist/               # Build output (default directory)
//!     ├── index.html
//!     └── style.css
//! ```

use std::path::{Path, PathBuf};

/// Project configuration filename
pub const CONFIG_FILE: &str = "folio.toml";

/// Directory of static assets copied into the build
pub const ASSETS_DIR: &str = "assets";

/// Default build output directory
pub const DEFAULT_OUT_DIR: &str = "dist";

/// Rendered page filename
pub const PAGE_FILE: &str = "index.html";

/// Stylesheet filename
pub const STYLE_FILE: &str = "style.css";

/// Path to the project config file
#[must_use]
pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Path to the project assets directory
#[must_use]
pub fn assets_dir(root: &Path) -> PathBuf {
    root.join(ASSETS_DIR)
}

/// Path of the rendered page inside an output directory
#[must_use]
pub fn page_path(out_dir: &Path) -> PathBuf {
    out_dir.join(PAGE_FILE)
}

/// Path of the stylesheet inside an output directory
#[must_use]
pub fn style_path(out_dir: &Path) -> PathBuf {
    out_dir.join(STYLE_FILE)
}
