//! Integration tests for the folio CLI
//!
//! These tests simulate real-world workflows against a scratch project
//! directory, testing the full cycle of: build → inspect artifacts →
//! check → status.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper function to create a folio command
fn folio() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("folio"))
}

/// Helper to run a build in a directory and return the parsed JSON result
fn build_json(dir: &std::path::Path) -> serde_json::Value {
    let output = folio().args(["build", "--json"]).current_dir(dir).output().unwrap();
    assert!(output.status.success(), "build should succeed");
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// END-TO-END WORKFLOW TESTS
// =============================================================================

/// Test complete workflow: build → artifacts on disk → check → status
#[test]
fn test_e2e_build_check_status() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    // Step 1: Build the site
    folio()
        .arg("build")
        .current_dir(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Built"))
        .stdout(predicate::str::contains("index.html"));

    // Step 2: The page and stylesheet land in the default output directory
    let page = fs::read_to_string(root.join("dist/index.html")).unwrap();
    let style = fs::read_to_string(root.join("dist/style.css")).unwrap();

    // Step 3: The page carries all five section anchors
    for id in ["home", "about", "skills", "projects", "contact"] {
        assert!(page.contains(&format!("id=\"{id}\"")), "page should contain #{id}");
    }

    // Step 4: The reveal script and its no-script fallback are inlined
    assert!(page.contains("IntersectionObserver"));
    assert!(page.contains("threshold: 0.15"));
    assert!(page.contains("0px 0px -8% 0px"));
    assert!(page.contains("<noscript>"));

    // Step 5: The stylesheet defines the reveal transition contract
    assert!(style.contains(".reveal {"));
    assert!(style.contains(".reveal.in-view {"));
    assert!(style.contains("prefers-reduced-motion"));

    // Step 6: The audit passes on what build renders
    folio()
        .arg("check")
        .current_dir(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("checks passed"));

    // Step 7: Status agrees with the built page
    folio()
        .arg("status")
        .current_dir(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sections:  5"));
}

/// Test that build output and status report the same reveal element count
#[test]
fn test_build_and_status_agree_on_reveal_count() {
    let temp = TempDir::new().unwrap();

    let build = build_json(temp.path());

    let output = folio().args(["status", "--json"]).output().unwrap();
    assert!(output.status.success());
    let status: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(build["reveal_elements"], status["reveal_elements"]);

    // The rendered markup carries exactly that many reveal-tagged elements
    let page = fs::read_to_string(temp.path().join("dist/index.html")).unwrap();
    let tagged = page
        .split("class=\"")
        .skip(1)
        .filter(|rest| {
            let attr = rest.split('"').next().unwrap_or_default();
            attr.split_whitespace().any(|class| class == "reveal")
        })
        .count();
    assert_eq!(serde_json::json!(tagged), status["reveal_elements"]);
}

/// Test that reported artifact sizes match what landed on disk
#[test]
fn test_build_artifacts_match_disk() {
    let temp = TempDir::new().unwrap();

    let build = build_json(temp.path());
    let out_dir = temp.path().join("dist");

    let artifacts = build["artifacts"].as_array().unwrap();
    assert!(artifacts.len() >= 2, "page and stylesheet at minimum");

    for artifact in artifacts {
        let path = out_dir.join(artifact["path"].as_str().unwrap());
        assert!(path.exists(), "{} should exist", path.display());
        let bytes = fs::metadata(&path).unwrap().len();
        assert_eq!(serde_json::json!(bytes), artifact["bytes"]);
    }
}

/// Test that rebuilding overwrites stale artifacts in place
#[test]
fn test_rebuild_overwrites_stale_output() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    // First build, then corrupt the page by hand
    folio().arg("build").current_dir(root).assert().success();
    fs::write(root.join("dist/index.html"), "<html>stale</html>").unwrap();

    // Second build restores the real page
    folio().arg("build").current_dir(root).assert().success();

    let page = fs::read_to_string(root.join("dist/index.html")).unwrap();
    assert!(!page.contains("stale"));
    assert!(page.contains("id=\"contact\""));
}

// =============================================================================
// CONFIGURATION TESTS
// =============================================================================

/// Test that folio.toml drives the output directory
#[test]
fn test_config_file_sets_out_dir() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::write(root.join("folio.toml"), "[build]\nout_dir = \"site\"\n").unwrap();

    folio().arg("build").current_dir(root).assert().success();

    assert!(root.join("site/index.html").exists());
    assert!(!root.join("dist").exists());
}

/// Test that --out wins over the config file
#[test]
fn test_out_flag_overrides_config() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::write(root.join("folio.toml"), "[build]\nout_dir = \"site\"\n").unwrap();

    folio().args(["build", "--out", "public"]).current_dir(root).assert().success();

    assert!(root.join("public/index.html").exists());
    assert!(!root.join("site").exists());
}

/// Test that nested output directories are created as needed
#[test]
fn test_build_creates_nested_out_dir() {
    let temp = TempDir::new().unwrap();

    folio()
        .args(["build", "--out", "out/nested/site"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(temp.path().join("out/nested/site/index.html").exists());
    assert!(temp.path().join("out/nested/site/style.css").exists());
}

/// Test that a malformed config falls back to defaults instead of failing
#[test]
fn test_malformed_config_falls_back_to_defaults() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::write(root.join("folio.toml"), "not valid toml [[[").unwrap();

    folio().arg("build").current_dir(root).assert().success();

    assert!(root.join("dist/index.html").exists());
}

// =============================================================================
// ASSET TESTS
// =============================================================================

/// Test that assets flow through the build, nested directories included
#[test]
fn test_assets_copied_into_output() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::create_dir_all(root.join("assets/img")).unwrap();
    fs::write(root.join("assets/profile.jpg"), b"primary portrait").unwrap();
    fs::write(root.join("assets/user-2.jpeg"), b"fallback portrait").unwrap();
    fs::write(root.join("assets/img/shot.png"), b"screenshot").unwrap();

    let build = build_json(root);

    assert!(root.join("dist/profile.jpg").exists());
    assert!(root.join("dist/user-2.jpeg").exists());
    assert!(root.join("dist/img/shot.png").exists());

    let copied = fs::read(root.join("dist/img/shot.png")).unwrap();
    assert_eq!(copied, b"screenshot");

    // Copied assets show up in the artifact list alongside the page
    let paths: Vec<&str> = build["artifacts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|artifact| artifact["path"].as_str().unwrap())
        .collect();
    assert!(paths.contains(&"index.html"));
    assert!(paths.contains(&"style.css"));
    assert!(paths.contains(&"profile.jpg"));
}

/// Test that a missing assets directory is not an error
#[test]
fn test_build_without_assets_dir() {
    let temp = TempDir::new().unwrap();

    folio().arg("build").current_dir(temp.path()).assert().success();

    let build = build_json(temp.path());
    assert_eq!(build["artifacts"].as_array().unwrap().len(), 2);
}

// =============================================================================
// RENDERED PAGE CONTRACT TESTS
// =============================================================================

/// Test that every nav link on the built page resolves to a section id
#[test]
fn test_built_nav_targets_resolve() {
    let temp = TempDir::new().unwrap();

    build_json(temp.path());
    let page = fs::read_to_string(temp.path().join("dist/index.html")).unwrap();

    for rest in page.split("href=\"#").skip(1) {
        let target = rest.split('"').next().unwrap_or_default();
        assert!(page.contains(&format!("id=\"{target}\"")), "#{target} should resolve");
    }
}

/// Test that outbound links on the built page open a new browsing context
#[test]
fn test_built_external_links_policy() {
    let temp = TempDir::new().unwrap();

    build_json(temp.path());
    let page = fs::read_to_string(temp.path().join("dist/index.html")).unwrap();

    let mut outbound = 0;
    for rest in page.split("<a ").skip(1) {
        let tag = rest.split('>').next().unwrap_or_default();
        if tag.contains("href=\"http") {
            outbound += 1;
            assert!(tag.contains("target=\"_blank\""), "outbound link missing target: {tag}");
            assert!(tag.contains("rel=\"noopener noreferrer\""), "outbound link missing rel: {tag}");
        }
    }
    assert!(outbound >= 4, "hero action plus three project links");
}

/// Test that the built page wires the portrait fallback exactly once
#[test]
fn test_built_portrait_fallback() {
    let temp = TempDir::new().unwrap();

    build_json(temp.path());
    let page = fs::read_to_string(temp.path().join("dist/index.html")).unwrap();

    assert_eq!(page.matches("onerror=").count(), 1);
    assert!(page.contains("this.onerror=null;this.src='/user-2.jpeg';"));
}
