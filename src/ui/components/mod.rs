//! Reusable UI components

mod button;
mod toast;

pub use button::{render_button, render_link, BUTTON_HEIGHT};
pub use toast::render_toasts;
