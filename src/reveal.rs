//! Scroll-reveal model
//!
//! Core abstractions:
//! - `RevealConfig`: the fixed observation constants (visibility threshold,
//!   bottom viewport inset) and the browser script emitted from them
//! - `RevealObserver`: watches a set of elements and applies the one-way
//!   `unrevealed -> revealed` transition on the first qualifying visibility
//!   event, then stops watching that element
//!
//! The observer is a scoped resource: it is mounted over the reveal-tagged
//! elements of a rendered page and released on every exit path (`disconnect`,
//! also called on `Drop`). After release the watch set is empty and event
//! delivery is a no-op.
//!
//! The emitted script and the Rust model share one set of constants, so the
//! behavior the tests pin here is the behavior the page ships.

use serde::Serialize;

/// Class carried by every element eligible for the reveal effect
pub const REVEAL_CLASS: &str = "reveal";

/// Class added when an element reveals; the stylesheet transitions on it
pub const IN_VIEW_CLASS: &str = "in-view";

/// Number of staggered transition-delay classes (`delay-1`..`delay-3`)
pub const DELAY_STEPS: usize = 3;

/// Stagger class for the `index`-th element of a list, cycling through
/// `delay-1`..`delay-3`
#[must_use]
pub fn delay_class(index: usize) -> String {
    let step = index % DELAY_STEPS + 1;
    format!("delay-{step}")
}

/// Element geometry relative to the viewport, in pixels
///
/// `top` and `bottom` are distances from the viewport's top edge; an element
/// scrolled below the fold has `top` greater than the viewport height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Top edge of the element
    pub top: f64,
    /// Bottom edge of the element
    pub bottom: f64,
}

impl Bounds {
    /// Bounds from top and bottom edges
    #[must_use]
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }
}

/// Fixed observation constants
///
/// Not exposed in the config file; `Default` supplies the shipped values and
/// the emitted script embeds them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RevealConfig {
    /// Fraction of an element's area that must be visible before it reveals
    pub threshold: f64,
    /// Percentage shaved off the bottom of the viewport before visibility is
    /// measured, so elements reveal slightly before reaching the very edge
    pub bottom_inset_percent: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.15,
            bottom_inset_percent: 8.0,
        }
    }
}

impl RevealConfig {
    /// The root margin string embedded in the emitted script
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}% 0px", self.bottom_inset_percent)
    }

    /// Whether a visible fraction is enough to reveal an element
    #[must_use]
    pub const fn qualifies(&self, visible_fraction: f64) -> bool {
        visible_fraction >= self.threshold
    }

    /// Fraction of an element visible inside the inset viewport
    ///
    /// The bottom boundary is pulled up by `bottom_inset_percent` of the
    /// viewport height before the overlap is measured. Returns 0.0 for
    /// degenerate (zero or negative height) bounds.
    #[must_use]
    pub fn visible_fraction(&self, bounds: Bounds, viewport_height: f64) -> f64 {
        let height = bounds.bottom - bounds.top;
        if height <= 0.0 || viewport_height <= 0.0 {
            return 0.0;
        }
        let boundary = viewport_height * (1.0 - self.bottom_inset_percent / 100.0);
        let visible = bounds.bottom.min(boundary) - bounds.top.max(0.0);
        (visible / height).clamp(0.0, 1.0)
    }

    /// The inline browser script equivalent to the Rust model
    ///
    /// Guards against the observation primitive being absent (every element
    /// reveals immediately) and disconnects on `pagehide`.
    #[must_use]
    pub fn script(&self) -> String {
        SCRIPT_TEMPLATE
            .replace("__REVEAL__", REVEAL_CLASS)
            .replace("__IN_VIEW__", IN_VIEW_CLASS)
            .replace("__THRESHOLD__", &self.threshold.to_string())
            .replace("__ROOT_MARGIN__", &self.root_margin())
    }
}

const SCRIPT_TEMPLATE: &str = r#"(() => {
  const elements = Array.from(document.querySelectorAll(".__REVEAL__"));
  if (!("IntersectionObserver" in window)) {
    elements.forEach((el) => el.classList.add("__IN_VIEW__"));
    return;
  }
  const observer = new IntersectionObserver(
    (entries) => {
      entries.forEach((entry) => {
        if (entry.isIntersecting) {
          entry.target.classList.add("__IN_VIEW__");
          observer.unobserve(entry.target);
        }
      });
    },
    { threshold: __THRESHOLD__, rootMargin: "__ROOT_MARGIN__" }
  );
  elements.forEach((el) => observer.observe(el));
  window.addEventListener("pagehide", () => observer.disconnect(), { once: true });
})();"#;

/// Per-element reveal state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RevealState {
    /// Initial state, element is hidden by the stylesheet
    Unrevealed,
    /// Terminal state, element is visible; never reverts
    Revealed,
}

/// A visibility event for one watched element
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Key of the element the event is about
    pub key: String,
    /// Fraction of the element visible inside the inset viewport
    pub visible_fraction: f64,
}

impl Observation {
    /// Observation for `key` at the given visible fraction
    #[must_use]
    pub fn new(key: impl Into<String>, visible_fraction: f64) -> Self {
        Self {
            key: key.into(),
            visible_fraction,
        }
    }
}

#[derive(Debug)]
struct Element {
    key: String,
    state: RevealState,
    watched: bool,
}

/// Watches reveal-tagged elements and applies the one-way transition
///
/// Mounted over the ordered element keys of a rendered page. Delivery of a
/// qualifying observation reveals exactly the element it names and stops
/// watching it; delivery for an already-revealed or unknown key is a no-op.
#[derive(Debug)]
pub struct RevealObserver {
    config: RevealConfig,
    elements: Vec<Element>,
    connected: bool,
}

impl RevealObserver {
    /// Observer with an empty watch set
    #[must_use]
    pub const fn new(config: RevealConfig) -> Self {
        Self {
            config,
            elements: Vec::new(),
            connected: true,
        }
    }

    /// Observer already watching every key, in order
    #[must_use]
    pub fn mount<I, S>(config: RevealConfig, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut observer = Self::new(config);
        for key in keys {
            observer.observe(key);
        }
        observer
    }

    /// The constants this observer evaluates events against
    #[must_use]
    pub const fn config(&self) -> RevealConfig {
        self.config
    }

    /// Start watching an element; re-observing a revealed or already-watched
    /// key is a no-op, as is observing after disconnect
    pub fn observe(&mut self, key: impl Into<String>) {
        if !self.connected {
            return;
        }
        let key = key.into();
        match self.elements.iter_mut().find(|e| e.key == key) {
            Some(element) => {
                if element.state == RevealState::Unrevealed {
                    element.watched = true;
                }
            },
            None => self.elements.push(Element {
                key,
                state: RevealState::Unrevealed,
                watched: true,
            }),
        }
    }

    /// Apply a batch of visibility events, returning the keys revealed by
    /// this delivery in event order
    ///
    /// Only watched elements with a qualifying fraction transition; each
    /// transition stops observation of that element, so a duplicate event in
    /// the same or a later batch is a no-op. After disconnect, delivery
    /// mutates nothing.
    pub fn deliver(&mut self, observations: &[Observation]) -> Vec<String> {
        let mut revealed = Vec::new();
        if !self.connected {
            return revealed;
        }
        for observation in observations {
            let Some(element) = self.elements.iter_mut().find(|e| e.key == observation.key)
            else {
                continue;
            };
            if element.watched && self.config.qualifies(observation.visible_fraction) {
                element.state = RevealState::Revealed;
                element.watched = false;
                revealed.push(element.key.clone());
            }
        }
        revealed
    }

    /// Release the observation: empties the watch set and ignores everything
    /// delivered afterwards; idempotent
    pub fn disconnect(&mut self) {
        for element in &mut self.elements {
            element.watched = false;
        }
        self.connected = false;
    }

    /// Whether the observation has not been released yet
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    /// State of an element, if it was ever observed
    #[must_use]
    pub fn state(&self, key: &str) -> Option<RevealState> {
        self.elements.iter().find(|e| e.key == key).map(|e| e.state)
    }

    /// Whether an element has revealed
    #[must_use]
    pub fn is_revealed(&self, key: &str) -> bool {
        self.state(key) == Some(RevealState::Revealed)
    }

    /// Number of elements currently watched
    #[must_use]
    pub fn watched_count(&self) -> usize {
        self.elements.iter().filter(|e| e.watched).count()
    }

    /// Number of elements that have revealed
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| e.state == RevealState::Revealed)
            .count()
    }

    /// Number of elements ever observed
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}
