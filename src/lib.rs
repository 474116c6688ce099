//! folio - a single-binary generator, auditor, and preview server for a
//! personal portfolio site
//!
//! This library renders a fixed set of portfolio content records into a
//! static single-page site, models the page's scroll-reveal behavior so it
//! can be tested, and audits the rendered document against the site's
//! structural contract (anchors, navigation, link policy, image fallback).

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

pub mod audit;
pub mod config;
pub mod content;
pub mod output;
pub mod page;
pub mod paths;
pub mod reveal;
pub mod server;
