//! Markup highlighting using syntect
//!
//! Colours fetched HTML for the result pane

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use std::sync::OnceLock;
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Style as SyntectStyle, Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

const MARKUP_EXTENSION: &str = "html";
const THEME_NAME: &str = "base16-ocean.dark";

// Only load from single thread once
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

/// HTML highlighter sharing syntect's global syntax and theme sets
pub struct MarkupHighlighter {
    syntax: Option<&'static SyntaxReference>,
    theme: &'static Theme,
}

impl MarkupHighlighter {
    pub fn new() -> Self {
        let theme_set = THEME_SET.get_or_init(ThemeSet::load_defaults);
        let theme = &theme_set.themes[THEME_NAME];
        let syntax = Self::get_syntax_set().find_syntax_by_extension(MARKUP_EXTENSION);

        Self { syntax, theme }
    }

    fn get_syntax_set() -> &'static SyntaxSet {
        SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
    }

    /// Highlight markup line by line; falls back to plain text if no HTML syntax is bundled
    pub fn highlight(&self, content: &str) -> Text<'static> {
        let syntax = match self.syntax {
            Some(syntax) => syntax,
            None => return Text::from(content.to_string()),
        };

        let mut highlighter = HighlightLines::new(syntax, self.theme);
        let syntax_set = Self::get_syntax_set();
        let mut lines = Vec::new();
        for line in LinesWithEndings::from(content) {
            let highlights = highlighter
                .highlight_line(line, syntax_set)
                .unwrap_or_default();
            let spans: Vec<Span> = highlights
                .iter()
                .map(|(style, text)| {
                    let text = text.trim_end_matches(['\n', '\r']).to_string();
                    Span::styled(text, syntect_style_to_ratatui(*style))
                })
                .collect();

            lines.push(Line::from(spans));
        }

        Text::from(lines)
    }
}

impl Default for MarkupHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert syntect style to ratatui style
fn syntect_style_to_ratatui(style: SyntectStyle) -> Style {
    let fg_color = Color::Rgb(style.foreground.r, style.foreground.g, style.foreground.b);

    let mut ratatui_style = Style::default().fg(fg_color);

    if style.font_style.contains(FontStyle::BOLD) {
        ratatui_style = ratatui_style.bold();
    }
    if style.font_style.contains(FontStyle::ITALIC) {
        ratatui_style = ratatui_style.italic();
    }
    if style.font_style.contains(FontStyle::UNDERLINE) {
        ratatui_style = ratatui_style.underlined();
    }

    ratatui_style
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &Text) -> Vec<String> {
        text.lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_highlight_keeps_text_content() {
        let highlighter = MarkupHighlighter::new();
        let text = highlighter.highlight("<h1>Sirius</h1>\n<p>A1V</p>\n");

        assert_eq!(plain(&text), vec!["<h1>Sirius</h1>", "<p>A1V</p>"]);
    }

    #[test]
    fn test_highlight_colours_markup() {
        let highlighter = MarkupHighlighter::new();
        let text = highlighter.highlight("<h1>Sirius</h1>");

        assert!(text
            .lines
            .iter()
            .flat_map(|line| line.spans.iter())
            .any(|span| span.style.fg.is_some()));
    }

    #[test]
    fn test_highlight_empty_content() {
        let highlighter = MarkupHighlighter::default();
        assert!(highlighter.highlight("").lines.is_empty());
    }
}
