//! Page renderer
//!
//! Pure transform from the content records to the HTML document: ordered
//! records become ordered fragments, fields land in fixed display slots,
//! list order is preserved. The renderer also:
//! - tags reveal-eligible elements and collects their keys in document
//!   order, so the observer can be mounted over exactly that set
//! - escapes every piece of text interpolated into markup
//! - embeds the reveal script emitted from the same constants the Rust
//!   model runs on
//! - links the stylesheet and ships a `<noscript>` override so content is
//!   never permanently hidden from script-less user agents

pub mod markup;
mod sections;
mod style;

pub use style::STYLE_CSS;

use crate::VERSION;
use crate::content::{SiteContent, anchor};
use crate::reveal::{REVEAL_CLASS, RevealConfig};

/// A fully rendered page
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// The HTML document
    pub html: String,
    /// Keys of the reveal-tagged elements, in document order
    pub reveal_keys: Vec<String>,
}

impl RenderedPage {
    /// Number of reveal-tagged elements on the page
    #[must_use]
    pub fn reveal_count(&self) -> usize {
        self.reveal_keys.len()
    }
}

/// Render the whole document from content records
#[must_use]
pub fn render(content: &SiteContent, reveal: RevealConfig) -> RenderedPage {
    let mut tagger = markup::RevealTagger::new();

    let mut body = String::new();
    body.push_str(&sections::navbar(content.brand));
    body.push_str("  <main>\n");
    body.push_str(&sections::hero(&content.hero, anchor::HOME, &mut tagger));
    body.push_str(&sections::about(&content.about, anchor::ABOUT, &mut tagger));
    body.push_str(&sections::skills(&content.skills, anchor::SKILLS, &mut tagger));
    body.push_str(&sections::projects(&content.projects, anchor::PROJECTS, &mut tagger));
    body.push_str(&sections::contact(&content.contact, anchor::CONTACT, &mut tagger));
    body.push_str("  </main>\n");

    let html = DOCUMENT_TEMPLATE
        .replace("__VERSION__", VERSION)
        .replace("__TITLE__", &markup::escape(content.brand))
        .replace("__DESCRIPTION__", &markup::escape(content.hero.lead))
        .replace("__REVEAL__", REVEAL_CLASS)
        .replace("__BODY__", &body)
        .replace("__SCRIPT__", &reveal.script());

    RenderedPage {
        html,
        reveal_keys: tagger.into_keys(),
    }
}

const DOCUMENT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta name="generator" content="folio __VERSION__">
  <meta name="description" content="__DESCRIPTION__">
  <title>__TITLE__</title>
  <link rel="stylesheet" href="style.css">
  <noscript>
    <style>
      .__REVEAL__ { opacity: 1; transform: none; transition: none; }
    </style>
  </noscript>
</head>
<body>
__BODY__
  <script>
__SCRIPT__
  </script>
</body>
</html>
"#;
