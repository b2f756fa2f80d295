//! Form state management for the registration form

use super::field::FormField;
use crate::state::{Field, FieldErrors, RegistrationInput, Schema};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Focusable rows of the registration form, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    Input(Field),
    SubmitButton,
    SignInLink,
}

/// Registration form: four inputs, the submit button and the sign-in link
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub name: FormField,
    pub email: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    pub active_field_index: usize,
    /// Errors from the latest validation pass
    pub errors: FieldErrors,
    /// Set by the first submit attempt; edits re-validate from then on
    pub submit_attempted: bool,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text(Field::Name),
            email: FormField::text(Field::Email),
            password: FormField::secret(Field::Password),
            confirm_password: FormField::secret(Field::ConfirmPassword),
            active_field_index: 0,
            errors: FieldErrors::default(),
            submit_attempted: false,
        }
    }

    pub fn active_row(&self) -> FormRow {
        match Field::ALL.get(self.active_field_index) {
            Some(field) => FormRow::Input(*field),
            None if self.active_field_index == Field::ALL.len() => FormRow::SubmitButton,
            None => FormRow::SignInLink,
        }
    }

    pub fn is_row_active(&self, row: FormRow) -> bool {
        self.active_row() == row
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// Snapshot of the current values
    pub fn input(&self) -> RegistrationInput {
        RegistrationInput {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            password: self.password.as_text().to_string(),
            confirm_password: self.confirm_password.as_text().to_string(),
        }
    }

    /// Validate for submission; returns the input only when every rule passes
    pub fn validate(&mut self, schema: &Schema) -> Option<RegistrationInput> {
        self.submit_attempted = true;
        let input = self.input();
        match schema.validate(&input) {
            Ok(()) => {
                self.errors.clear();
                Some(input)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Recompute errors after an edit, once a submit has been attempted
    pub fn revalidate(&mut self, schema: &Schema) {
        if !self.submit_attempted {
            return;
        }
        self.errors = match schema.validate(&self.input()) {
            Ok(()) => FieldErrors::default(),
            Err(errors) => errors,
        };
    }

    /// Type into the active input; returns false on non-input rows
    pub fn input_char(&mut self, c: char) -> bool {
        match self.get_active_field_mut() {
            Some(field) => {
                field.push_char(c);
                true
            }
            None => false,
        }
    }

    pub fn backspace(&mut self) -> bool {
        match self.get_active_field_mut() {
            Some(field) => {
                field.pop_char();
                true
            }
            None => false,
        }
    }

    pub fn clear_active(&mut self) -> bool {
        match self.get_active_field_mut() {
            Some(field) => {
                field.clear();
                true
            }
            None => false,
        }
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegisterForm {
    fn field_count(&self) -> usize {
        6 // name, email, password, confirm, submit, sign-in link
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(5);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.password),
            3 => Some(&mut self.confirm_password),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.password),
            3 => Some(&self.confirm_password),
            _ => None,
        }
    }
}
