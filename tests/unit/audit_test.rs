//! Tests for the page audit
//!
//! The audit must pass on the page the renderer actually produces and
//! catch documents that lost one of the structural guarantees.

use folio::audit::{AuditReport, audit_page};
use folio::content::SITE;
use folio::page::{RenderedPage, STYLE_CSS, render};
use folio::reveal::RevealConfig;

fn audited(page: &RenderedPage) -> AuditReport {
    audit_page(&SITE, page, STYLE_CSS).unwrap()
}

#[test]
fn the_rendered_page_is_audit_clean() {
    let page = render(&SITE, RevealConfig::default());
    let report = audited(&page);
    assert!(report.passed(), "{:?}", report.checks);
    assert_eq!(report.failed_count(), 0);
    assert_eq!(report.checks.len(), 10);
}

#[test]
fn check_ids_are_stable() {
    let page = render(&SITE, RevealConfig::default());
    let report = audited(&page);
    let ids: Vec<_> = report.checks.iter().map(|c| c.id).collect();
    assert_eq!(
        ids,
        [
            "anchors",
            "nav-targets",
            "external-links",
            "contact-mailto",
            "portrait-fallback",
            "reveal-script",
            "stylesheet",
            "reveal-parity",
            "skills-order",
            "projects-order",
        ]
    );
}

#[test]
fn a_page_without_the_script_fails_the_script_check() {
    let mut page = render(&SITE, RevealConfig::default());
    let start = page.html.find("<script>").unwrap();
    let end = page.html.find("</script>").unwrap();
    page.html.replace_range(start..end, "");
    let report = audited(&page);
    let check = report.checks.iter().find(|c| c.id == "reveal-script").unwrap();
    assert!(!check.passed);
}

#[test]
fn reordered_projects_fail_the_order_check() {
    let mut page = render(&SITE, RevealConfig::default());
    page.html = page
        .html
        .replace("<h3>Medico</h3>", "<h3>__swap__</h3>")
        .replace("<h3>CLYNK</h3>", "<h3>Medico</h3>")
        .replace("<h3>__swap__</h3>", "<h3>CLYNK</h3>");
    let report = audited(&page);
    let check = report.checks.iter().find(|c| c.id == "projects-order").unwrap();
    assert!(!check.passed);
}

#[test]
fn a_missing_mailto_fails_the_contact_check() {
    let mut page = render(&SITE, RevealConfig::default());
    page.html = page.html.replace("mailto:", "mail-to:");
    let report = audited(&page);
    let check = report.checks.iter().find(|c| c.id == "contact-mailto").unwrap();
    assert!(!check.passed);
    assert!(!report.passed());
    assert_eq!(report.failed_count(), 1);
}

#[test]
fn the_report_serializes_for_json_output() {
    let page = render(&SITE, RevealConfig::default());
    let report = audited(&page);
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"id\":\"anchors\""));
    assert!(json.contains("\"passed\":true"));
}
