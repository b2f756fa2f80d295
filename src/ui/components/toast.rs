//! Toast notification overlay

use crate::state::{Notification, NotificationKind, NotificationQueue};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Maximum width of a toast, borders included
const TOAST_MAX_WIDTH: u16 = 44;

/// Stack the queued toasts in the top-right corner of `area`, oldest on top
pub fn render_toasts(frame: &mut Frame, area: Rect, queue: &NotificationQueue) {
    let width = area.width.min(TOAST_MAX_WIDTH);
    if width < 8 {
        return;
    }
    let x = area.x + area.width - width;
    let mut y = area.y;

    for notification in queue.iter() {
        let lines = wrap_text(&notification.message, (width - 4) as usize);
        let height = lines.len() as u16 + 2;
        if y + height > area.y + area.height {
            break;
        }

        let toast_area = Rect {
            x,
            y,
            width,
            height,
        };
        render_toast(frame, toast_area, notification, lines);
        y += height;
    }
}

fn render_toast(frame: &mut Frame, area: Rect, notification: &Notification, lines: Vec<String>) {
    let color = match notification.kind {
        NotificationKind::Success => Color::Green,
        NotificationKind::Error => Color::Red,
    };

    // Clear the area behind the toast
    frame.render_widget(Clear, area);

    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", notification.kind.title()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} ", notification.timestamp()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let content: Vec<Line> = lines
        .into_iter()
        .map(|l| Line::from(format!(" {l}")))
        .collect();

    let toast = Paragraph::new(content)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(toast, area);
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let current_len = current_line.chars().count();
            if current_len + word.chars().count() + 1 > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_line() {
        assert_eq!(wrap_text("Account created", 40), vec!["Account created"]);
    }

    #[test]
    fn test_long_text_wraps_on_words() {
        let lines = wrap_text("Email already registered! Sign in to continue.", 20);
        assert_eq!(
            lines,
            vec!["Email already", "registered! Sign in", "to continue."]
        );
        assert!(lines.iter().all(|l| l.chars().count() <= 20));
    }

    #[test]
    fn test_empty_text_yields_one_blank_line() {
        assert_eq!(wrap_text("", 20), vec![String::new()]);
    }
}
