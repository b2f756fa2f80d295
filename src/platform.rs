//! Platform-specific key bindings and labels

use crossterm::event::KeyModifiers;

/// Extra modifier accepted for the submit shortcut, next to Ctrl
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for the status bar
/// - macOS: "Cmd+S"
/// - Linux/Windows: "Ctrl+S"
#[cfg(target_os = "macos")]
pub const SUBMIT_SHORTCUT: &str = "Cmd+S";

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Clear-field shortcut display
pub const CLEAR_SHORTCUT: &str = "Ctrl+U";
