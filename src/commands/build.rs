//! Build the site into an output directory

use std::fs;
use std::path::Path;

use chrono::Utc;
use walkdir::WalkDir;

use folio::config::SiteConfig;
use folio::content::SITE;
use folio::output::{Artifact, BuildResult, OutputMode};
use folio::page::{STYLE_CSS, render};
use folio::paths;
use folio::reveal::RevealConfig;

/// Render `index.html` and `style.css` into the output directory and copy
/// the project's `assets/` tree next to them
pub fn build(out: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let root = std::env::current_dir()?;
    let config = SiteConfig::load(&root);
    let out_dir = root.join(out.unwrap_or(&config.build.out_dir));

    let page = render(&SITE, RevealConfig::default());
    log::debug!("rendered {} bytes, {} reveal elements", page.html.len(), page.reveal_count());

    fs::create_dir_all(&out_dir)?;
    let mut artifacts = Vec::new();

    fs::write(paths::page_path(&out_dir), &page.html)?;
    artifacts.push(Artifact {
        path: paths::PAGE_FILE.to_string(),
        bytes: page.html.len() as u64,
    });

    fs::write(paths::style_path(&out_dir), STYLE_CSS)?;
    artifacts.push(Artifact {
        path: paths::STYLE_FILE.to_string(),
        bytes: STYLE_CSS.len() as u64,
    });

    artifacts.extend(copy_assets(&paths::assets_dir(&root), &out_dir)?);

    let result = BuildResult {
        out_dir: out_dir.display().to_string(),
        artifacts,
        reveal_elements: page.reveal_count(),
        generated_at: Utc::now(),
    };
    result.render(mode);
    Ok(())
}

/// Copy every file under `assets` into the output directory, preserving
/// relative paths so site-root references keep resolving
fn copy_assets(assets: &Path, out_dir: &Path) -> anyhow::Result<Vec<Artifact>> {
    let mut copied = Vec::new();
    if !assets.is_dir() {
        return Ok(copied);
    }
    for entry in WalkDir::new(assets) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(assets)?;
        let dest = out_dir.join(relative);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(entry.path(), &dest)?;
        copied.push(Artifact {
            path: relative.display().to_string(),
            bytes: entry.metadata()?.len(),
        });
    }
    Ok(copied)
}
