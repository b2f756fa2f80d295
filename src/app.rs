//! Application state and core logic

use crate::api::{AccountApi, NewUser, SubmissionOutcome};
use crate::platform;
use crate::state::{AppState, Form, FormRow, NotificationKind, Schema, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Account service client
    api: Arc<dyn AccountApi>,
    /// Rules checked on every submit
    schema: Schema,
    /// Outcomes of finished requests, sent back from the request task
    outcome_tx: mpsc::UnboundedSender<SubmissionOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmissionOutcome>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(api: Arc<dyn AccountApi>, notification_ttl: Duration) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(notification_ttl),
            api,
            schema: Schema::registration(),
            outcome_tx,
            outcome_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Per-frame housekeeping: apply finished requests, expire toasts
    pub fn tick(&mut self, now: Instant) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
        self.state.notifications.prune(now);
    }

    /// Handle a key event for the current view
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.state.current_view {
            View::Register => self.handle_register_key(key),
            View::SignIn => self.handle_sign_in_key(key),
        }
    }

    /// Handle keys in Register view
    fn handle_register_key(&mut self, key: KeyEvent) {
        // AltGr arrives as Ctrl+Alt on Windows and must still type
        let altgr = key.modifiers.contains(KeyModifiers::ALT);
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL) && !altgr;
        let chord = ctrl || (key.modifiers.contains(platform::SUBMIT_MODIFIER) && !altgr);
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Char('s') if chord => {
                self.submit();
            }
            KeyCode::Char('u') if ctrl => {
                if self.state.form.clear_active() {
                    self.state.form.revalidate(&self.schema);
                }
            }
            KeyCode::Char(_) if chord => {}
            KeyCode::Char(c) => {
                if self.state.form.input_char(c) {
                    self.state.form.revalidate(&self.schema);
                }
            }
            KeyCode::Backspace => {
                if self.state.form.backspace() {
                    self.state.form.revalidate(&self.schema);
                }
            }
            KeyCode::Enter => match self.state.form.active_row() {
                FormRow::SignInLink => self.state.navigate(View::SignIn),
                FormRow::Input(_) | FormRow::SubmitButton => {
                    self.submit();
                }
            },
            KeyCode::Esc => {
                if !self.state.notifications.is_empty() {
                    tracing::debug!("Dismissing notifications");
                    self.state.notifications.dismiss_all();
                }
            }
            _ => {}
        }
    }

    /// Handle keys in Sign In view
    fn handle_sign_in_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter => {
                self.state.navigate(View::Register)
            }
            _ => {}
        }
    }

    /// Validate the form and, if it passes, send one registration request.
    ///
    /// Returns true when a request was started. Submits while a request is
    /// in flight are ignored.
    pub fn submit(&mut self) -> bool {
        if self.state.submitting {
            tracing::debug!("Ignoring submit while a registration is in flight");
            return false;
        }

        let Some(input) = self.state.form.validate(&self.schema) else {
            let fields: Vec<&str> = self
                .state
                .form
                .errors
                .iter()
                .map(|(field, _)| field.key())
                .collect();
            tracing::debug!(
                "Validation failed on {} field(s): {fields:?}",
                self.state.form.errors.len()
            );
            return false;
        };

        let user = NewUser::from(&input);
        tracing::info!("Submitting registration");
        self.state.submitting = true;

        let api = Arc::clone(&self.api);
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let request = tokio::spawn(async move { api.create_user(&user).await });
            let outcome = match request.await {
                Ok(result) => SubmissionOutcome::from_response(result),
                Err(err) => {
                    tracing::error!("Registration request task failed: {err}");
                    SubmissionOutcome::TransportFailure
                }
            };
            let _ = tx.send(outcome);
        });
        true
    }

    fn apply_outcome(&mut self, outcome: SubmissionOutcome) {
        self.state.submitting = false;
        match outcome {
            SubmissionOutcome::Created => tracing::info!("Account created"),
            SubmissionOutcome::Conflict => tracing::info!("Email already registered"),
            SubmissionOutcome::UnknownFailure(status) => {
                tracing::warn!("Unexpected status {status} from account service")
            }
            SubmissionOutcome::TransportFailure => {}
        }
        let (kind, message) = outcome.notice();
        self.notify(kind, message);
    }

    fn notify(&mut self, kind: NotificationKind, message: &str) {
        let id = self.state.notifications.push(kind, message);
        tracing::debug!("Raised {kind:?} notification {id}");
    }

    /// Wait for the in-flight request and apply its outcome
    #[cfg(test)]
    async fn finish_submission(&mut self) -> Option<SubmissionOutcome> {
        let outcome = self.outcome_rx.recv().await?;
        self.apply_outcome(outcome);
        Some(outcome)
    }
}
