//! Application state definitions

use super::forms::RegisterForm;
use super::notification::NotificationQueue;
use std::time::Duration;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Register,
    SignIn,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Register => "Sign Up",
            Self::SignIn => "Sign In",
        }
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_view: View,
    pub form: RegisterForm,
    pub notifications: NotificationQueue,
    /// A registration request is in flight
    pub submitting: bool,
}

impl AppState {
    pub fn new(notification_ttl: Duration) -> Self {
        Self {
            notifications: NotificationQueue::new(notification_ttl),
            ..Default::default()
        }
    }

    /// Switch views; leaving the form tears it down
    pub fn navigate(&mut self, view: View) {
        if self.current_view == View::Register && view != View::Register {
            self.form = RegisterForm::new();
        }
        self.current_view = view;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Field, Schema};

    #[test]
    fn test_default_view_is_register() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Register);
        assert!(!state.submitting);
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn test_leaving_register_resets_form() {
        let mut state = AppState::default();
        state.form.input_char('A');
        state.form.validate(&Schema::registration());
        assert!(state.form.error(Field::Email).is_some());

        state.navigate(View::SignIn);
        assert_eq!(state.current_view, View::SignIn);
        assert_eq!(state.form.name.as_text(), "");
        assert!(state.form.errors.is_empty());
        assert!(!state.form.submit_attempted);
    }

    #[test]
    fn test_staying_on_register_keeps_form() {
        let mut state = AppState::default();
        state.form.input_char('A');
        state.navigate(View::Register);
        assert_eq!(state.form.name.as_text(), "A");
    }

    #[test]
    fn test_view_titles() {
        assert_eq!(View::Register.title(), "Sign Up");
        assert_eq!(View::SignIn.title(), "Sign In");
    }
}
