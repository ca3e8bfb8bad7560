//! Result content rendering.
//!
//! Decides how much of the remote markup is trusted and turns it into
//! something a terminal can show: either the markup itself or readable text.

use clap::ValueEnum;
use regex::Regex;
use std::sync::OnceLock;

/// How far remote markup is trusted before it is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ContentPolicy {
    /// Run the markup through an allow-list sanitizer first
    #[default]
    Sanitize,
    /// Show the markup exactly as the service returned it
    Trust,
}

impl ContentPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            ContentPolicy::Sanitize => "sanitize",
            ContentPolicy::Trust => "trust",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ContentPolicy::Sanitize => "Remote markup is sanitized before display (default)",
            ContentPolicy::Trust => {
                "Remote markup is shown unmodified, scripts and handlers included"
            }
        }
    }
}

/// Presentation of a result in the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultView {
    /// Highlighted markup
    #[default]
    Markup,
    /// Tags stripped, entities decoded
    Text,
}

impl ResultView {
    pub fn toggled(self) -> Self {
        match self {
            ResultView::Markup => ResultView::Text,
            ResultView::Text => ResultView::Markup,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResultView::Markup => "markup",
            ResultView::Text => "text",
        }
    }
}

static SCRIPT_RE: OnceLock<Regex> = OnceLock::new();
static STYLE_RE: OnceLock<Regex> = OnceLock::new();
static BREAK_RE: OnceLock<Regex> = OnceLock::new();
static TAG_RE: OnceLock<Regex> = OnceLock::new();
static BLANK_LINES_RE: OnceLock<Regex> = OnceLock::new();

fn script_re() -> &'static Regex {
    SCRIPT_RE.get_or_init(|| Regex::new(r"(?is)<script\b.*?</script\s*>").unwrap())
}

fn style_re() -> &'static Regex {
    STYLE_RE.get_or_init(|| Regex::new(r"(?is)<style\b.*?</style\s*>").unwrap())
}

fn break_re() -> &'static Regex {
    // Line breaks and the ends of block-level elements start a new line
    BREAK_RE.get_or_init(|| {
        Regex::new(r"(?i)<br\s*/?>|</(p|div|h[1-6]|li|tr|table|ul|ol|section|article|pre|blockquote)\s*>")
            .unwrap()
    })
}

fn tag_re() -> &'static Regex {
    TAG_RE.get_or_init(|| Regex::new(r"(?s)<[^>]*>").unwrap())
}

fn blank_lines_re() -> &'static Regex {
    BLANK_LINES_RE.get_or_init(|| Regex::new(r"\n{3,}").unwrap())
}

/// Applies the configured policy and view to fetched markup
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentRenderer {
    policy: ContentPolicy,
}

impl ContentRenderer {
    pub fn new(policy: ContentPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ContentPolicy {
        self.policy
    }

    /// Markup as it may be displayed under the current policy
    pub fn prepare_markup(&self, raw: &str) -> String {
        match self.policy {
            ContentPolicy::Trust => raw.to_string(),
            ContentPolicy::Sanitize => ammonia::clean(raw),
        }
    }

    /// Content ready for the result pane
    pub fn render(&self, raw: &str, view: ResultView) -> String {
        let markup = self.prepare_markup(raw);
        match view {
            ResultView::Markup => markup,
            ResultView::Text => markup_to_text(&markup),
        }
    }
}

/// Strip markup down to readable text
pub fn markup_to_text(markup: &str) -> String {
    let without_scripts = script_re().replace_all(markup, "");
    let without_styles = style_re().replace_all(&without_scripts, "");
    let with_breaks = break_re().replace_all(&without_styles, "\n");
    let stripped = tag_re().replace_all(&with_breaks, "");
    let decoded = decode_entities(&stripped);

    let trimmed_lines = decoded
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");

    blank_lines_re()
        .replace_all(&trimmed_lines, "\n\n")
        .trim()
        .to_string()
}

/// Decode the handful of entities sanitized markup commonly carries
fn decode_entities(text: &str) -> String {
    // &amp; last so that "&amp;lt;" stays "&lt;"
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}
