//! UI rendering and layout module

use crate::constants::INPUT_PLACEHOLDER;
use crate::tui::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the whole panel for the current state
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    if app.panel.input_visible() {
        draw_search(frame, app, chunks[0]);
    } else {
        draw_result(frame, app, chunks[0]);
    }
    draw_status(frame, app, chunks[1]);
}

fn draw_search(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let query = app.panel.query();
    let input_line = if query.is_empty() {
        Line::from(vec![
            Span::styled("\u{2588}", Style::default().fg(Color::Cyan)),
            Span::styled(INPUT_PLACEHOLDER, Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(Span::styled(
            format!("{}\u{2588}", query),
            Style::default().fg(Color::Cyan),
        ))
    };
    let input = Paragraph::new(input_line)
        .block(Block::default().borders(Borders::ALL).title(" Star name "));
    frame.render_widget(input, chunks[0]);

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("[Enter]", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" Search  "),
        Span::styled("[Esc]", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" Quit"),
    ]));
    frame.render_widget(hint, chunks[1]);

    if let Some(error) = app.panel.error() {
        let error = Paragraph::new(Span::styled(error, Style::default().fg(Color::Red)));
        frame.render_widget(error, chunks[2]);
    }
}

fn draw_result(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let hint = Paragraph::new(Line::from(vec![
        Span::styled(
            "[Backspace/b]",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Back to Search  "),
        Span::styled("[t]", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" Toggle markup/text  "),
        Span::styled("[\u{2191}/\u{2193}]", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" Scroll"),
    ]));
    frame.render_widget(hint, chunks[0]);

    let title = format!(" Star data ({}) ", app.result_view.label());
    let content = app.rendered_result().cloned().unwrap_or_default();
    let body = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    frame.render_widget(body, chunks[1]);
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::DIM));
    frame.render_widget(status, area);
}
