//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use chrono::{TimeZone, Utc};
use folio::audit::{AuditReport, audit_page};
use folio::content::SITE;
use folio::output::{Artifact, AuditResult, BuildResult, OutputMode, StatusResult};
use folio::page::{STYLE_CSS, render};
use folio::reveal::RevealConfig;

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// BuildResult Serialization Tests
// =============================================================================

#[test]
fn build_result_serialization() {
    let result = BuildResult {
        out_dir: "dist".to_string(),
        artifacts: vec![
            Artifact {
                path: "index.html".to_string(),
                bytes: 14_200,
            },
            Artifact {
                path: "style.css".to_string(),
                bytes: 5_800,
            },
        ],
        reveal_elements: 29,
        generated_at: Utc.with_ymd_and_hms(2026, 8, 26, 12, 0, 0).unwrap(),
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"out_dir\":\"dist\""));
    assert!(json.contains("\"path\":\"index.html\""));
    assert!(json.contains("\"bytes\":14200"));
    assert!(json.contains("\"reveal_elements\":29"));
    assert!(json.contains("2026-08-26T12:00:00Z"));
}

// =============================================================================
// AuditResult Tests
// =============================================================================

fn real_report() -> AuditReport {
    let page = render(&SITE, RevealConfig::default());
    audit_page(&SITE, &page, STYLE_CSS).unwrap()
}

#[test]
fn audit_result_mirrors_the_report() {
    let report = real_report();
    let result = AuditResult::from(&report);
    assert!(result.passed);
    assert_eq!(result.checks.len(), report.checks.len());
    assert_eq!(result.checks[0].id, "anchors");
}

#[test]
fn audit_result_serialization() {
    let result = AuditResult::from(&real_report());
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"passed\":true"));
    assert!(json.contains("\"id\":\"reveal-parity\""));
    assert!(json.contains("\"detail\""));
}

// =============================================================================
// StatusResult Serialization Tests
// =============================================================================

#[test]
fn status_result_serialization() {
    let result = StatusResult {
        version: "0.1.0".to_string(),
        sections: 5,
        skill_groups: 4,
        skills: 15,
        projects: 3,
        reveal_elements: 29,
        reveal_threshold: 0.15,
        reveal_root_margin: "0px 0px -8% 0px".to_string(),
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"sections\":5"));
    assert!(json.contains("\"skills\":15"));
    assert!(json.contains("\"reveal_threshold\":0.15"));
    assert!(json.contains("\"reveal_root_margin\":\"0px 0px -8% 0px\""));
}
