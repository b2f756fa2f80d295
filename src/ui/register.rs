//! Registration form rendering

use super::components::{render_button, render_link, BUTTON_HEIGHT};
use super::forms::{draw_error_line, draw_field};
use super::layout::centered;
use crate::app::App;
use crate::state::{Form, FormRow};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

const FORM_WIDTH: u16 = 60;
const FORM_HEIGHT: u16 = 26;

/// Draw the sign-up form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let area = centered(area, FORM_WIDTH, FORM_HEIGHT);

    let block = Block::default()
        .title(" Sign Up ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(1),
            Constraint::Length(3), // Email
            Constraint::Length(1),
            Constraint::Length(3), // Password
            Constraint::Length(1),
            Constraint::Length(3), // Confirm password
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Sign-in link
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    // Each input takes two chunks: the box and its error line
    for index in 0..4 {
        if let Some(field) = form.get_field(index) {
            let row = FormRow::Input(field.field);
            let error = form.error(field.field);
            draw_field(
                frame,
                chunks[index * 2],
                field,
                form.is_row_active(row),
                error.is_some(),
            );
            draw_error_line(frame, chunks[index * 2 + 1], error);
        }
    }

    let label = if app.state.submitting {
        "Submitting…"
    } else {
        "Sign Up"
    };
    render_button(
        frame,
        chunks[8],
        label,
        form.is_row_active(FormRow::SubmitButton),
        !app.state.submitting,
    );

    render_link(
        frame,
        chunks[9],
        "Already have an account?",
        "Sign In",
        form.is_row_active(FormRow::SignInLink),
    );
}
