//! TUI application state and event handling

use crate::config::AppConfig;
use crate::panel::{PanelView, SearchPanel};
use crate::render::{ContentRenderer, ResultView};
use crate::star::{FetchDispatcher, StarDataService};
use crate::tui::events::{KeyAction, KeyContext};
use crate::tui::highlighter::MarkupHighlighter;
use crate::Result;
use ratatui::text::Text;
use std::sync::Arc;

/// Lines moved by PageUp / PageDown
const PAGE_SCROLL: u16 = 10;

/// Main TUI application state
pub struct App {
    /// Query, result and error state
    pub panel: SearchPanel,

    /// Runs lookups off the UI thread
    dispatcher: FetchDispatcher,

    /// Trust decision and markup-to-text conversion
    renderer: ContentRenderer,

    /// Markup or text presentation of the current result
    pub result_view: ResultView,

    /// First visible line of the result pane
    pub scroll: u16,

    /// Whether the app should quit
    pub should_quit: bool,

    highlighter: MarkupHighlighter,

    /// Result content prepared for display, rebuilt when the result or view changes
    rendered: Option<Text<'static>>,
}

impl App {
    /// Create the application around a star data service
    pub fn new(config: &AppConfig, service: Arc<dyn StarDataService>) -> Result<Self> {
        let mut panel = SearchPanel::new(config.ordering);
        if let Some(query) = &config.initial_query {
            panel.update_query(query.as_str());
        }

        Ok(Self {
            panel,
            dispatcher: FetchDispatcher::new(service)?,
            renderer: ContentRenderer::new(config.content_policy),
            result_view: ResultView::default(),
            scroll: 0,
            should_quit: false,
            highlighter: MarkupHighlighter::new(),
            rendered: None,
        })
    }

    /// Which key bindings apply right now
    pub fn key_context(&self) -> KeyContext {
        if self.panel.input_visible() {
            KeyContext::Input
        } else {
            KeyContext::Result
        }
    }

    /// Apply a key action to the application state
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.quit(),
            KeyAction::Search => self.submit_search(),
            KeyAction::InputChar(c) => self.panel.push_char(c),
            KeyAction::DeleteChar => self.panel.pop_char(),
            KeyAction::ClearInput => self.panel.update_query(""),
            KeyAction::Back => self.go_back(),
            KeyAction::ToggleView => self.toggle_view(),
            KeyAction::ScrollUp => self.scroll_by(-1),
            KeyAction::ScrollDown => self.scroll_by(1),
            KeyAction::PageUp => self.scroll_by(-i32::from(PAGE_SCROLL)),
            KeyAction::PageDown => self.scroll_by(i32::from(PAGE_SCROLL)),
            KeyAction::ScrollTop => self.scroll = 0,
            KeyAction::None => {}
        }
    }

    /// Issue a lookup for the current query. Input stays enabled while it runs.
    pub fn submit_search(&mut self) {
        let request = self.panel.search();
        self.dispatcher.dispatch(request);
    }

    /// Apply every finished lookup; returns how many changed the panel
    pub fn drain_outcomes(&mut self) -> usize {
        let mut applied = 0;
        while let Some(outcome) = self.dispatcher.try_next() {
            if self.panel.apply(outcome) {
                applied += 1;
            }
        }

        if applied > 0 {
            self.scroll = 0;
            self.refresh_rendered();
        }
        applied
    }

    /// Back to the search input
    pub fn go_back(&mut self) {
        self.panel.reset();
        self.result_view = ResultView::default();
        self.scroll = 0;
        self.rendered = None;
    }

    /// Switch between markup and text presentation
    pub fn toggle_view(&mut self) {
        self.result_view = self.result_view.toggled();
        self.scroll = 0;
        self.refresh_rendered();
    }

    fn refresh_rendered(&mut self) {
        self.rendered = self.panel.result().map(|raw| {
            let content = self.renderer.render(raw, self.result_view);
            match self.result_view {
                ResultView::Markup => self.highlighter.highlight(&content),
                ResultView::Text => Text::from(content),
            }
        });
    }

    /// Content for the result pane, if a result is shown
    pub fn rendered_result(&self) -> Option<&Text<'static>> {
        self.rendered.as_ref()
    }

    fn content_height(&self) -> u16 {
        self.rendered
            .as_ref()
            .map(|text| u16::try_from(text.lines.len()).unwrap_or(u16::MAX))
            .unwrap_or(0)
    }

    fn scroll_by(&mut self, delta: i32) {
        let max = i32::from(self.content_height().saturating_sub(1));
        let next = (i32::from(self.scroll) + delta).clamp(0, max.max(0));
        self.scroll = u16::try_from(next).unwrap_or(0);
    }

    /// Set quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Status line text
    pub fn status_message(&self) -> String {
        match self.panel.view() {
            PanelView::Searching => format!(
                "Searching... ({} in flight)",
                self.panel.in_flight()
            ),
            PanelView::Success => format!(
                "Showing {} view ({} content)",
                self.result_view.label(),
                self.renderer.policy().name()
            ),
            PanelView::Failure => "Search failed".to_string(),
            PanelView::Idle => "Ready to search".to_string(),
        }
    }
}
