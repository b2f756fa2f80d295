//! Declarative validation schema for the registration form
//!
//! A [`Schema`] is an ordered list of [`Rule`] objects. Every rule sees the
//! whole [`RegistrationInput`], so cross-field checks such as "confirmation
//! equals password" are ordinary rules naming two fields. For each field only
//! the first failing rule is reported.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Minimum password length, counted in characters
pub const MIN_PASSWORD_LEN: usize = 6;

/// Values captured from the form for one submit attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Fields of the registration form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn value<'a>(&self, input: &'a RegistrationInput) -> &'a str {
        match self {
            Self::Name => &input.name,
            Self::Email => &input.email,
            Self::Password => &input.password,
            Self::ConfirmPassword => &input.confirm_password,
        }
    }
}

/// Per-field error messages from one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// Record `message` unless the field already failed an earlier rule
    fn record(&mut self, field: Field, message: &str) {
        self.0.entry(field).or_insert_with(|| message.to_string());
    }
}

/// A single validation rule attached to one field
pub trait Rule: Send + Sync {
    /// Field the error is reported against
    fn field(&self) -> Field;

    /// `Err(message)` when the input breaks the rule
    fn check(&self, input: &RegistrationInput) -> Result<(), String>;
}

/// Field must be non-empty
pub struct Required {
    pub field: Field,
    pub message: &'static str,
}

impl Rule for Required {
    fn field(&self) -> Field {
        self.field
    }

    fn check(&self, input: &RegistrationInput) -> Result<(), String> {
        if self.field.value(input).is_empty() {
            Err(self.message.to_string())
        } else {
            Ok(())
        }
    }
}

/// Field must look like an email address; empty values are left to [`Required`]
pub struct EmailFormat {
    pub field: Field,
    pub message: &'static str,
}

impl Rule for EmailFormat {
    fn field(&self) -> Field {
        self.field
    }

    fn check(&self, input: &RegistrationInput) -> Result<(), String> {
        let value = self.field.value(input);
        if value.is_empty() || is_email(value) {
            Ok(())
        } else {
            Err(self.message.to_string())
        }
    }
}

/// Field must be at least `min` UTF-16 code units long, as browsers count it
pub struct MinLength {
    pub field: Field,
    pub min: usize,
    pub message: &'static str,
}

impl Rule for MinLength {
    fn field(&self) -> Field {
        self.field
    }

    fn check(&self, input: &RegistrationInput) -> Result<(), String> {
        if self.field.value(input).encode_utf16().count() >= self.min {
            Ok(())
        } else {
            Err(self.message.to_string())
        }
    }
}

/// Field must equal another field
pub struct MatchesField {
    pub field: Field,
    pub other: Field,
    pub message: &'static str,
}

impl Rule for MatchesField {
    fn field(&self) -> Field {
        self.field
    }

    fn check(&self, input: &RegistrationInput) -> Result<(), String> {
        if self.field.value(input) == self.other.value(input) {
            Ok(())
        } else {
            Err(self.message.to_string())
        }
    }
}

/// Ordered set of rules
pub struct Schema {
    rules: Vec<Box<dyn Rule>>,
}

impl Schema {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Rules for the sign-up form
    pub fn registration() -> Self {
        Self::new()
            .rule(Required {
                field: Field::Name,
                message: "Name is required",
            })
            .rule(Required {
                field: Field::Email,
                message: "Email is required",
            })
            .rule(EmailFormat {
                field: Field::Email,
                message: "Enter a valid email",
            })
            .rule(Required {
                field: Field::Password,
                message: "Password is required",
            })
            .rule(MinLength {
                field: Field::Password,
                min: MIN_PASSWORD_LEN,
                message: "Password must be at least 6 characters",
            })
            .rule(Required {
                field: Field::ConfirmPassword,
                message: "Password confirmation is required",
            })
            .rule(MatchesField {
                field: Field::ConfirmPassword,
                other: Field::Password,
                message: "Passwords must match",
            })
    }

    /// Run every rule; any error fails the whole input
    pub fn validate(&self, input: &RegistrationInput) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        for rule in &self.rules {
            if errors.get(rule.field()).is_some() {
                continue;
            }
            if let Err(message) = rule.check(input) {
                errors.record(rule.field(), &message);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::registration()
    }
}

fn is_email(value: &str) -> bool {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, email: &str, password: &str, confirm: &str) -> RegistrationInput {
        RegistrationInput {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    fn ana() -> RegistrationInput {
        input("Ana", "ana@x.com", "abcdef", "abcdef")
    }

    fn errors_for(input: &RegistrationInput) -> FieldErrors {
        Schema::registration().validate(input).unwrap_err()
    }

    mod required {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_input_passes() {
            assert!(Schema::registration().validate(&ana()).is_ok());
        }

        #[test]
        fn test_empty_form_flags_every_field() {
            let errors = errors_for(&RegistrationInput::default());
            assert_eq!(errors.len(), 4);
            assert_eq!(errors.get(Field::Name), Some("Name is required"));
            assert_eq!(errors.get(Field::Email), Some("Email is required"));
            assert_eq!(errors.get(Field::Password), Some("Password is required"));
            assert_eq!(
                errors.get(Field::ConfirmPassword),
                Some("Password confirmation is required")
            );
        }

        #[test]
        fn test_each_empty_field_fails_alone() {
            for field in Field::ALL {
                let mut candidate = ana();
                match field {
                    Field::Name => candidate.name.clear(),
                    Field::Email => candidate.email.clear(),
                    Field::Password => candidate.password.clear(),
                    Field::ConfirmPassword => candidate.confirm_password.clear(),
                }
                let errors = errors_for(&candidate);
                assert!(errors.get(field).is_some(), "{field:?} should fail");
            }
        }

        #[test]
        fn test_whitespace_name_counts_as_present() {
            assert!(Schema::registration()
                .validate(&input(" ", "ana@x.com", "abcdef", "abcdef"))
                .is_ok());
        }
    }

    mod email {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_email_reports_required_not_invalid() {
            let errors = errors_for(&input("Ana", "", "abcdef", "abcdef"));
            assert_eq!(errors.get(Field::Email), Some("Email is required"));
        }

        #[test]
        fn test_malformed_emails_are_rejected() {
            for email in ["ana", "ana@", "@x.com", "ana@x", "ana @x.com", "ana@@x.com"] {
                let errors = errors_for(&input("Ana", email, "abcdef", "abcdef"));
                assert_eq!(
                    errors.get(Field::Email),
                    Some("Enter a valid email"),
                    "{email} should be invalid"
                );
            }
        }

        #[test]
        fn test_well_formed_emails_pass() {
            for email in ["ana@x.com", "a.b+c@mail.example.org"] {
                assert!(Schema::registration()
                    .validate(&input("Ana", email, "abcdef", "abcdef"))
                    .is_ok());
            }
        }
    }

    mod password {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_short_password_is_rejected() {
            let errors = errors_for(&input("Ana", "ana@x.com", "abcde", "abcde"));
            assert_eq!(
                errors.get(Field::Password),
                Some("Password must be at least 6 characters")
            );
            assert!(errors.get(Field::ConfirmPassword).is_none());
        }

        #[test]
        fn test_length_counts_utf16_units() {
            // Three astral-plane emoji are six UTF-16 units
            assert!(Schema::registration()
                .validate(&input("Ana", "ana@x.com", "😀😀😀", "😀😀😀"))
                .is_ok());

            let errors = errors_for(&input("Ana", "ana@x.com", "ééé", "ééé"));
            assert_eq!(
                errors.get(Field::Password),
                Some("Password must be at least 6 characters")
            );
            assert!(Schema::registration()
                .validate(&input("Ana", "ana@x.com", "éééééé", "éééééé"))
                .is_ok());
        }

        #[test]
        fn test_mismatch_fails_on_confirmation_only() {
            let errors = errors_for(&input("Ana", "ana@x.com", "abcdef", "abcdee"));
            assert_eq!(errors.len(), 1);
            assert_eq!(
                errors.get(Field::ConfirmPassword),
                Some("Passwords must match")
            );
        }

        #[test]
        fn test_empty_confirmation_reports_required_first() {
            let errors = errors_for(&input("Ana", "ana@x.com", "abcdef", ""));
            assert_eq!(
                errors.get(Field::ConfirmPassword),
                Some("Password confirmation is required")
            );
        }
    }

    mod schema {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_first_failing_rule_wins() {
            let schema = Schema::new()
                .rule(Required {
                    field: Field::Name,
                    message: "first",
                })
                .rule(MinLength {
                    field: Field::Name,
                    min: 3,
                    message: "second",
                });
            let errors = schema.validate(&RegistrationInput::default()).unwrap_err();
            assert_eq!(errors.get(Field::Name), Some("first"));
        }

        #[test]
        fn test_empty_schema_accepts_anything() {
            assert!(Schema::new().validate(&RegistrationInput::default()).is_ok());
        }

        #[test]
        fn test_errors_iterate_in_field_order() {
            let errors = errors_for(&RegistrationInput::default());
            let fields: Vec<Field> = errors.iter().map(|(field, _)| field).collect();
            assert_eq!(fields, Field::ALL.to_vec());
        }

        #[test]
        fn test_field_keys_match_wire_names() {
            assert_eq!(Field::ConfirmPassword.key(), "confirmPassword");
            assert_eq!(Field::Name.key(), "name");
        }
    }
}
