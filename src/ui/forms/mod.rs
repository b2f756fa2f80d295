//! Form rendering module
//!
//! - `field_renderer`: input boxes and their inline error lines

mod field_renderer;

pub use field_renderer::{draw_error_line, draw_field};
