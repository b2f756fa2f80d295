//! Sign-in placeholder view

use super::layout::centered;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the sign-in view; signing in happens outside this tool
pub fn draw(frame: &mut Frame, area: Rect) {
    let area = centered(area, 50, 7);

    let text = vec![
        Line::from("Sign in with the account you registered."),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" to go back to sign up"),
        ]),
    ];

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .title(" Sign In ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(paragraph, area);
}
