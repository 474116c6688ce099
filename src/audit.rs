//! Page audit
//!
//! Machine checks over a rendered page. The renderer is supposed to uphold
//! these guarantees by construction; the audit proves it on the actual
//! artifacts, so a content or markup change that breaks one fails `check`
//! instead of shipping.
//!
//! Pure logic: no I/O, the caller supplies the rendered page and the
//! stylesheet.

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::content::{SiteContent, anchor};
use crate::page::RenderedPage;
use crate::reveal::{IN_VIEW_CLASS, REVEAL_CLASS, RevealConfig};

/// Failure while preparing the audit
#[derive(Debug, Error)]
pub enum AuditError {
    /// A check pattern failed to compile
    #[error("invalid audit pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Outcome of one named check
#[derive(Debug, Clone, Serialize)]
pub struct AuditCheck {
    /// Stable check identifier
    pub id: &'static str,
    /// Whether the page satisfied the check
    pub passed: bool,
    /// What the check found
    pub detail: String,
}

impl AuditCheck {
    fn pass(id: &'static str, detail: impl Into<String>) -> Self {
        Self {
            id,
            passed: true,
            detail: detail.into(),
        }
    }

    fn fail(id: &'static str, detail: impl Into<String>) -> Self {
        Self {
            id,
            passed: false,
            detail: detail.into(),
        }
    }
}

/// Outcome of the whole audit
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    /// Every check, in execution order
    pub checks: Vec<AuditCheck>,
}

impl AuditReport {
    /// Whether every check passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Number of failed checks
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed).count()
    }
}

/// Run every check against a rendered page and its stylesheet
pub fn audit_page(
    content: &SiteContent,
    page: &RenderedPage,
    stylesheet: &str,
) -> Result<AuditReport, AuditError> {
    let html = &page.html;
    let checks = vec![
        check_anchors(html),
        check_nav_targets(html)?,
        check_external_links(content, html)?,
        check_mailto(content, html),
        check_portrait(content, html),
        check_reveal_script(html),
        check_stylesheet(html, stylesheet),
        check_reveal_parity(page)?,
        check_skills_order(content, html),
        check_projects_order(content, html),
    ];
    Ok(AuditReport { checks })
}

fn check_anchors(html: &str) -> AuditCheck {
    let mut wrong = Vec::new();
    for name in anchor::ALL {
        let count = html.matches(&format!("id=\"{name}\"")).count();
        if count != 1 {
            wrong.push(format!("#{name} x{count}"));
        }
    }
    if wrong.is_empty() {
        AuditCheck::pass("anchors", format!("{} anchors, each exactly once", anchor::ALL.len()))
    } else {
        AuditCheck::fail("anchors", wrong.join(", "))
    }
}

fn check_nav_targets(html: &str) -> Result<AuditCheck, AuditError> {
    let jump = Regex::new("href=\"#([a-z-]+)\"")?;
    let mut total = 0;
    let mut dangling = Vec::new();
    for capture in jump.captures_iter(html) {
        total += 1;
        let target = capture[1].to_owned();
        if !html.contains(&format!("id=\"{target}\"")) {
            dangling.push(target);
        }
    }
    let untargeted: Vec<_> = anchor::ALL
        .iter()
        .filter(|name| !html.contains(&format!("href=\"#{name}\"")))
        .collect();

    if dangling.is_empty() && untargeted.is_empty() {
        Ok(AuditCheck::pass(
            "nav-targets",
            format!("{total} in-page links, every section reachable"),
        ))
    } else {
        Ok(AuditCheck::fail(
            "nav-targets",
            format!("dangling targets {dangling:?}, unlinked sections {untargeted:?}"),
        ))
    }
}

fn check_external_links(content: &SiteContent, html: &str) -> Result<AuditCheck, AuditError> {
    let tag = Regex::new("<a [^>]*href=\"https?://[^\"]*\"[^>]*>")?;
    let mut total = 0;
    let mut unpoliced = 0;
    for found in tag.find_iter(html) {
        total += 1;
        let open_tag = found.as_str();
        if !open_tag.contains("target=\"_blank\"")
            || !open_tag.contains("rel=\"noopener noreferrer\"")
        {
            unpoliced += 1;
        }
    }
    let expected = content.external_links().len();
    if unpoliced == 0 && total == expected {
        Ok(AuditCheck::pass(
            "external-links",
            format!("{total} outbound links, all new-context with no opener"),
        ))
    } else {
        Ok(AuditCheck::fail(
            "external-links",
            format!("{total} outbound links (expected {expected}), {unpoliced} missing the policy"),
        ))
    }
}

fn check_mailto(content: &SiteContent, html: &str) -> AuditCheck {
    let email = content.contact.email;
    if html.contains(&format!("href=\"mailto:{email}\"")) {
        AuditCheck::pass("contact-mailto", format!("mailto link to {email}"))
    } else {
        AuditCheck::fail("contact-mailto", format!("no mailto link to {email}"))
    }
}

fn check_portrait(content: &SiteContent, html: &str) -> AuditCheck {
    let portrait = content.hero.portrait;
    let has_primary = html.contains(&format!("src=\"{}\"", portrait.primary));
    // The handler must clear itself before swapping so the substitution is
    // one-shot.
    let handler = format!("onerror=\"this.onerror=null;this.src='{}';\"", portrait.fallback);
    let has_fallback = html.contains(&handler);
    if has_primary && has_fallback {
        AuditCheck::pass(
            "portrait-fallback",
            format!("{} with one-shot fallback {}", portrait.primary, portrait.fallback),
        )
    } else {
        AuditCheck::fail(
            "portrait-fallback",
            format!("primary wired: {has_primary}, one-shot fallback wired: {has_fallback}"),
        )
    }
}

fn check_reveal_script(html: &str) -> AuditCheck {
    let config = RevealConfig::default();
    let threshold = format!("threshold: {}", config.threshold);
    let margin = format!("rootMargin: \"{}\"", config.root_margin());
    let missing: Vec<_> = [
        (threshold.as_str(), "threshold"),
        (margin.as_str(), "root margin"),
        ("observer.unobserve(entry.target)", "unobserve on reveal"),
        ("pagehide", "teardown"),
        ("IntersectionObserver\" in window", "missing-primitive guard"),
    ]
    .into_iter()
    .filter(|(needle, _)| !html.contains(needle))
    .map(|(_, what)| what)
    .collect();

    if missing.is_empty() {
        AuditCheck::pass(
            "reveal-script",
            format!("script embeds {threshold} and {margin}"),
        )
    } else {
        AuditCheck::fail("reveal-script", format!("script missing {missing:?}"))
    }
}

fn check_stylesheet(html: &str, stylesheet: &str) -> AuditCheck {
    let linked = html.contains("<link rel=\"stylesheet\" href=\"style.css\">");
    let hidden = stylesheet.contains(&format!(".{REVEAL_CLASS} {{"));
    let shown = stylesheet.contains(&format!(".{REVEAL_CLASS}.{IN_VIEW_CLASS} {{"));
    let staggered = (1..=3).all(|step| stylesheet.contains(&format!(".delay-{step} {{")));
    if linked && hidden && shown && staggered {
        AuditCheck::pass(
            "stylesheet",
            format!("linked, defines .{REVEAL_CLASS}/.{IN_VIEW_CLASS} and stagger steps"),
        )
    } else {
        AuditCheck::fail(
            "stylesheet",
            format!(
                "linked: {linked}, hidden state: {hidden}, revealed state: {shown}, \
                 staggers: {staggered}"
            ),
        )
    }
}

fn check_reveal_parity(page: &RenderedPage) -> Result<AuditCheck, AuditError> {
    let class_attr = Regex::new("class=\"([^\"]*)\"")?;
    let tagged = class_attr
        .captures_iter(&page.html)
        .filter(|capture| capture[1].split_whitespace().any(|c| c == REVEAL_CLASS))
        .count();
    let keys = page.reveal_keys.len();
    if tagged == keys {
        Ok(AuditCheck::pass(
            "reveal-parity",
            format!("{tagged} tagged elements match {keys} observer keys"),
        ))
    } else {
        Ok(AuditCheck::fail(
            "reveal-parity",
            format!("{tagged} tagged elements but {keys} observer keys"),
        ))
    }
}

fn check_skills_order(content: &SiteContent, html: &str) -> AuditCheck {
    let positions: Vec<_> = content
        .skills
        .groups
        .iter()
        .map(|group| html.find(&format!("<h3>{}</h3>", group.title)))
        .collect();
    let all_present = positions.iter().all(Option::is_some);
    let ordered = positions.windows(2).all(|pair| pair[0] < pair[1]);
    if all_present && ordered {
        AuditCheck::pass(
            "skills-order",
            format!("{} groups in display order", content.skills.groups.len()),
        )
    } else {
        AuditCheck::fail(
            "skills-order",
            format!("present: {all_present}, ordered: {ordered}"),
        )
    }
}

fn check_projects_order(content: &SiteContent, html: &str) -> AuditCheck {
    let positions: Vec<_> = content
        .projects
        .entries
        .iter()
        .map(|project| html.find(&format!("<h3>{}</h3>", project.name)))
        .collect();
    let all_present = positions.iter().all(Option::is_some);
    let ordered = positions.windows(2).all(|pair| pair[0] < pair[1]);
    let links_wired = content
        .projects
        .entries
        .iter()
        .all(|project| html.contains(&format!("href=\"{}\"", project.link)));
    if all_present && ordered && links_wired {
        AuditCheck::pass(
            "projects-order",
            format!("{} cards in display order, links wired", content.projects.entries.len()),
        )
    } else {
        AuditCheck::fail(
            "projects-order",
            format!("present: {all_present}, ordered: {ordered}, links: {links_wired}"),
        )
    }
}
