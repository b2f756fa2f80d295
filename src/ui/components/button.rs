//! Button and link components for TUI

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a generic button with border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render an inline link: a plain prompt followed by an underlined target
pub fn render_link(frame: &mut Frame, area: Rect, prompt: &str, target: &str, is_selected: bool) {
    let mut target_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::UNDERLINED);
    if is_selected {
        target_style = target_style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
    }

    let line = Line::from(vec![
        Span::styled(format!(" {prompt} "), Style::default().fg(Color::Gray)),
        Span::styled(target.to_string(), target_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
