//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod register;
mod sign_in;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    match app.state.current_view {
        View::Register => register::draw(frame, main_area, app),
        View::SignIn => sign_in::draw(frame, main_area),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Toasts float above everything else
    components::render_toasts(frame, main_area, &app.state.notifications);
}
