//! Form field value objects

use crate::state::Field;

/// Character shown in place of each secret character
const MASK_CHAR: char = '•';

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub field: Field,
    pub label: String,
    pub value: String,
    pub is_secret: bool,
}

impl FormField {
    /// Create a new plain text field
    pub fn text(field: Field) -> Self {
        Self {
            field,
            label: field.label().to_string(),
            value: String::new(),
            is_secret: false,
        }
    }

    /// Create a new masked field
    pub fn secret(field: Field) -> Self {
        Self {
            is_secret: true,
            ..Self::text(field)
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.is_secret {
            std::iter::repeat(MASK_CHAR)
                .take(self.value.chars().count())
                .collect()
        } else {
            self.value.clone()
        }
    }
}
