//! Local preview server command

use folio::config::SiteConfig;
use folio::content::SITE;
use folio::page::render;
use folio::paths;
use folio::reveal::RevealConfig;
use folio::server;

/// Render the page in memory and serve it until interrupted
pub fn serve(port: Option<u16>, open: bool) -> anyhow::Result<()> {
    let root = std::env::current_dir()?;
    let config = SiteConfig::load(&root);
    let port = port.unwrap_or(config.serve.port);
    let open = open || config.serve.open;

    let page = render(&SITE, RevealConfig::default());

    println!("Serving the portfolio preview...");
    println!("Open http://localhost:{port} in your browser");
    println!();
    println!("Press Ctrl+C to stop");

    if open {
        // Try to open browser
        #[cfg(target_os = "macos")]
        let _ = std::process::Command::new("open")
            .arg(format!("http://localhost:{port}"))
            .spawn();

        #[cfg(target_os = "linux")]
        let _ = std::process::Command::new("xdg-open")
            .arg(format!("http://localhost:{port}"))
            .spawn();

        #[cfg(target_os = "windows")]
        let _ = std::process::Command::new("cmd")
            .args(["/c", "start", &format!("http://localhost:{port}")])
            .spawn();
    }

    server::serve(&page.html, &paths::assets_dir(&root), port)?;
    Ok(())
}
