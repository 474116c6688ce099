//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;

use crate::audit::AuditReport;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a build operation
#[derive(Debug, Serialize)]
pub struct BuildResult {
    /// Output directory the artifacts were written into
    pub out_dir: String,
    /// Written artifacts, in write order
    pub artifacts: Vec<Artifact>,
    /// Number of reveal-tagged elements on the page
    pub reveal_elements: usize,
    /// When the build ran
    pub generated_at: DateTime<Utc>,
}

/// One written artifact
#[derive(Debug, Serialize)]
pub struct Artifact {
    /// Path relative to the output directory
    pub path: String,
    /// Size in bytes
    pub bytes: u64,
}

/// Result of a page audit
#[derive(Debug, Serialize)]
pub struct AuditResult {
    /// Whether every check passed
    pub passed: bool,
    /// Every check, in execution order
    pub checks: Vec<AuditLine>,
}

/// One audit check line
#[derive(Debug, Serialize)]
pub struct AuditLine {
    /// Check identifier
    pub id: String,
    /// Whether the check passed
    pub passed: bool,
    /// What the check found
    pub detail: String,
}

impl From<&AuditReport> for AuditResult {
    fn from(report: &AuditReport) -> Self {
        Self {
            passed: report.passed(),
            checks: report
                .checks
                .iter()
                .map(|check| AuditLine {
                    id: check.id.to_owned(),
                    passed: check.passed,
                    detail: check.detail.clone(),
                })
                .collect(),
        }
    }
}

/// Result of a status operation
#[derive(Debug, Serialize)]
pub struct StatusResult {
    /// Tool version
    pub version: String,
    /// Number of page sections
    pub sections: usize,
    /// Number of skill groups
    pub skill_groups: usize,
    /// Number of individual skills across all groups
    pub skills: usize,
    /// Number of project cards
    pub projects: usize,
    /// Number of reveal-tagged elements on the page
    pub reveal_elements: usize,
    /// Visibility fraction required to reveal an element
    pub reveal_threshold: f64,
    /// Root margin embedded in the reveal script
    pub reveal_root_margin: String,
}

impl BuildResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("{} {}", "Built".green().bold(), self.out_dir);
        for artifact in &self.artifacts {
            println!("  {}  {} bytes", artifact.path, artifact.bytes);
        }
        println!();
        println!("{} reveal-tagged elements", self.reveal_elements);
        println!("Generated at {}", self.generated_at.to_rfc3339());
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl AuditResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        for check in &self.checks {
            let mark = if check.passed {
                "ok".green()
            } else {
                "FAIL".red().bold()
            };
            println!("  [{mark}] {}: {}", check.id, check.detail);
        }
        println!();
        if self.passed {
            println!("{}: all {} checks passed", "Audit clean".green().bold(), self.checks.len());
        } else {
            let failed = self.checks.iter().filter(|c| !c.passed).count();
            println!(
                "{}: {failed} of {} checks failed",
                "Audit failed".red().bold(),
                self.checks.len()
            );
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl StatusResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("folio v{}", self.version);
        println!();
        println!("{}", "Content".bold());
        println!("  Sections:  {}", self.sections);
        println!("  Skills:    {} across {} groups", self.skills, self.skill_groups);
        println!("  Projects:  {}", self.projects);
        println!();
        println!("{}", "Reveal".bold());
        println!("  Elements:  {}", self.reveal_elements);
        println!("  Threshold: {}", self.reveal_threshold);
        println!("  Margin:    {}", self.reveal_root_margin);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
