//! Status command - summarize the compiled-in content

use folio::content::{SITE, anchor};
use folio::output::{OutputMode, StatusResult};
use folio::page::render;
use folio::reveal::RevealConfig;

/// Show what the page is made of and the reveal constants it ships with
pub fn status(mode: OutputMode) -> anyhow::Result<()> {
    let reveal = RevealConfig::default();
    let page = render(&SITE, reveal);

    let result = StatusResult {
        version: folio::VERSION.to_string(),
        sections: anchor::ALL.len(),
        skill_groups: SITE.skills.groups.len(),
        skills: SITE.skill_count(),
        projects: SITE.projects.entries.len(),
        reveal_elements: page.reveal_count(),
        reveal_threshold: reveal.threshold,
        reveal_root_margin: reveal.root_margin(),
    };
    result.render(mode);

    Ok(())
}
