//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::{CLEAR_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Center a box of at most `max_width` x `max_height` inside `area`
pub fn centered(area: Rect, max_width: u16, max_height: u16) -> Rect {
    let width = area.width.min(max_width);
    let height = area.height.min(max_height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.current_view.title()),
        Style::default().fg(Color::Cyan),
    )];

    // View-specific hints
    spans.push(Span::styled(
        get_view_hints(&app.state.current_view),
        Style::default().fg(Color::Gray),
    ));

    if app.state.submitting {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "Submitting…",
            Style::default().fg(Color::Yellow),
        ));
    }

    // Quit hint on the right
    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Register => format!(
            "Tab:next  Enter:submit  {SUBMIT_SHORTCUT}:submit  {CLEAR_SHORTCUT}:clear  Esc:dismiss"
        ),
        View::SignIn => "Esc:back".to_string(),
    }
}
