//! Markup building blocks
//!
//! Small helpers the section renderers share: text escaping, the outbound
//! link policy, and the reveal tagger that hands out class lists while
//! recording element keys in document order.

use crate::reveal::{REVEAL_CLASS, delay_class};

/// Escape text for interpolation into element content or attribute values
///
/// Covers the five characters that can change markup meaning; everything
/// else passes through untouched.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// An outbound link: opens a new browsing context with no opener and no
/// referrer
///
/// Every external link on the page goes through here, so the policy cannot
/// be forgotten on one of them.
#[must_use]
pub fn external_link(href: &str, class: &str, label: &str) -> String {
    format!(
        "<a href=\"{}\" class=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        escape(href),
        escape(class),
        escape(label)
    )
}

/// An in-page anchor jump link
#[must_use]
pub fn anchor_link(anchor: &str, class: &str, label: &str) -> String {
    if class.is_empty() {
        format!("<a href=\"#{}\">{}</a>", escape(anchor), escape(label))
    } else {
        format!(
            "<a href=\"#{}\" class=\"{}\">{}</a>",
            escape(anchor),
            escape(class),
            escape(label)
        )
    }
}

/// A `mailto:` contact link
#[must_use]
pub fn mailto_link(email: &str, class: &str) -> String {
    format!(
        "<a class=\"{}\" href=\"mailto:{}\">{}</a>",
        escape(class),
        escape(email),
        escape(email)
    )
}

/// Hands out reveal class lists and records element keys in document order
///
/// Every element tagged through here ends up in the key list the observer
/// is mounted over, so the watch set and the markup cannot drift apart.
#[derive(Debug, Default)]
pub struct RevealTagger {
    keys: Vec<String>,
}

impl RevealTagger {
    /// Empty tagger
    #[must_use]
    pub const fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Tag an element with `reveal` only (no stagger)
    pub fn tag(&mut self, key: &str) -> String {
        self.keys.push(key.to_owned());
        REVEAL_CLASS.to_owned()
    }

    /// Tag an element with `reveal` and a fixed stagger step (1-based)
    pub fn tag_step(&mut self, key: &str, step: usize) -> String {
        self.keys.push(key.to_owned());
        format!("{REVEAL_CLASS} delay-{step}")
    }

    /// Tag the `index`-th element of a list, cycling the stagger steps
    pub fn tag_cycling(&mut self, key: &str, index: usize) -> String {
        self.keys.push(key.to_owned());
        let delay = delay_class(index);
        format!("{REVEAL_CLASS} {delay}")
    }

    /// The recorded keys, in document order
    #[must_use]
    pub fn into_keys(self) -> Vec<String> {
        self.keys
    }
}
