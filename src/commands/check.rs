//! Audit the rendered page

use folio::audit::audit_page;
use folio::content::SITE;
use folio::output::{AuditResult, OutputMode};
use folio::page::{STYLE_CSS, render};
use folio::reveal::RevealConfig;

/// Render the page in memory and run every audit check against it
pub fn check(mode: OutputMode) -> anyhow::Result<()> {
    let page = render(&SITE, RevealConfig::default());
    let report = audit_page(&SITE, &page, STYLE_CSS)?;

    let result = AuditResult::from(&report);
    result.render(mode);

    if !result.passed {
        std::process::exit(1);
    }

    Ok(())
}
