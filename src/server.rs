//! Preview server
//!
//! `tiny_http` adapter serving the rendered page, the stylesheet, and
//! on-disk assets. The page is rendered once up front and served from
//! memory; requests are handled sequentially on the accepting thread.

use std::io::Cursor;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use tiny_http::{Header, Method, Response, Server};

use crate::page::STYLE_CSS;

/// Failure to run the preview server
#[derive(Debug, Error)]
pub enum ServeError {
    /// The listen address could not be bound
    #[error("cannot bind {addr}: {reason}")]
    Bind {
        /// Address that failed to bind
        addr: String,
        /// What the socket layer reported
        reason: String,
    },
}

/// Serve the page until the process is interrupted
///
/// Routes `/` and `/index.html` to the rendered page, `/style.css` to the
/// stylesheet, and any other GET to a file under `assets_root`; everything
/// else is a 404.
pub fn serve(html: &str, assets_root: &Path, port: u16) -> Result<(), ServeError> {
    let addr = format!("0.0.0.0:{port}");
    let server = Server::http(&addr).map_err(|e| ServeError::Bind {
        addr: addr.clone(),
        reason: e.to_string(),
    })?;
    log::info!("listening on http://localhost:{port}");

    for request in server.incoming_requests() {
        log::debug!("{} {}", request.method(), request.url());
        let response = route(request.method(), request.url(), html, assets_root);
        let _ = request.respond(response);
    }

    Ok(())
}

fn route(
    method: &Method,
    url: &str,
    html: &str,
    assets_root: &Path,
) -> Response<Cursor<Vec<u8>>> {
    match (method, url) {
        (&Method::Get, "/" | "/index.html") => serve_html(html),
        (&Method::Get, "/style.css") => serve_css(STYLE_CSS),
        (&Method::Get, _) => serve_asset(assets_root, url),
        _ => not_found(),
    }
}

// =============================================================================
// Response helpers
// =============================================================================

fn serve_html(content: &str) -> Response<Cursor<Vec<u8>>> {
    Response::from_data(content.as_bytes().to_vec())
        .with_header(Header::from_bytes("Content-Type", "text/html; charset=utf-8").unwrap())
}

fn serve_css(content: &str) -> Response<Cursor<Vec<u8>>> {
    Response::from_data(content.as_bytes().to_vec())
        .with_header(Header::from_bytes("Content-Type", "text/css; charset=utf-8").unwrap())
}

fn serve_asset(assets_root: &Path, url: &str) -> Response<Cursor<Vec<u8>>> {
    let Some(relative) = sanitize(url) else {
        return not_found();
    };
    let path = assets_root.join(relative);
    match std::fs::read(&path) {
        Ok(bytes) => Response::from_data(bytes)
            .with_header(Header::from_bytes("Content-Type", content_type(&path)).unwrap()),
        Err(_) => not_found(),
    }
}

fn not_found() -> Response<Cursor<Vec<u8>>> {
    Response::from_data(b"Not Found".to_vec()).with_status_code(404)
}

/// Turn a request url into a relative path, rejecting anything that could
/// escape the assets root
fn sanitize(url: &str) -> Option<PathBuf> {
    let trimmed = url.trim_start_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    let path = Path::new(trimmed);
    if path
        .components()
        .all(|component| matches!(component, Component::Normal(_)))
    {
        Some(path.to_path_buf())
    } else {
        None
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("ico") => "image/x-icon",
        Some("css") => "text/css; charset=utf-8",
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        _ => "application/octet-stream",
    }
}
