//! Form state for the interactive commands
//!
//! Forms hold the raw text the user typed, per-field errors and a general
//! error. Nothing invalid ever reaches a service: `to_request` only
//! succeeds after `validate` passes.

pub mod entry;
pub mod login;
pub mod signup;
pub mod validation;

pub use entry::{ExpenseField, ExpenseForm, LimitField, LimitForm};
pub use login::{LoginField, LoginForm};
pub use signup::{SignupField, SignupForm};
pub use validation::is_valid_email;

use std::collections::BTreeMap;

use crate::error::EconomyError;

/// Field and general errors of a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormErrors<F: Ord> {
    fields: BTreeMap<F, String>,
    general: Option<String>,
}

impl<F: Ord> Default for FormErrors<F> {
    fn default() -> Self {
        Self {
            fields: BTreeMap::new(),
            general: None,
        }
    }
}

impl<F: Ord + Copy> FormErrors<F> {
    /// Record `result` for `field`; returns whether it passed
    pub fn check(&mut self, field: F, result: Result<(), String>) -> bool {
        match result {
            Ok(()) => true,
            Err(message) => {
                self.fields.insert(field, message);
                false
            }
        }
    }

    pub fn field(&self, field: F) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn general(&self) -> Option<&str> {
        self.general.as_deref()
    }

    pub fn set_general(&mut self, message: impl Into<String>) {
        self.general = Some(message.into());
    }

    /// Typing into a field clears its error and the general error
    pub fn touch(&mut self, field: F) {
        self.fields.remove(&field);
        self.general = None;
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.general.is_none()
    }

    pub fn clear(&mut self) {
        self.fields.clear();
        self.general = None;
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> {
        self.fields.iter().map(|(f, m)| (*f, m.as_str()))
    }

    /// First field error as a validation error, for callers without a UI
    pub fn to_error(&self) -> EconomyError {
        let message = self
            .fields
            .values()
            .next()
            .cloned()
            .or_else(|| self.general.clone())
            .unwrap_or_else(|| "Invalid form".to_string());
        EconomyError::Validation(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Field {
        A,
        B,
    }

    #[test]
    fn test_touch_clears_field_and_general() {
        let mut errors = FormErrors::default();
        errors.check(Field::A, Err("bad a".into()));
        errors.check(Field::B, Err("bad b".into()));
        errors.set_general("server said no");

        errors.touch(Field::A);
        assert_eq!(errors.field(Field::A), None);
        assert_eq!(errors.field(Field::B), Some("bad b"));
        assert_eq!(errors.general(), None);
    }

    #[test]
    fn test_to_error_uses_first_field() {
        let mut errors = FormErrors::default();
        assert!(errors.check(Field::A, Ok(())));
        errors.check(Field::B, Err("bad b".into()));
        assert_eq!(errors.to_error(), EconomyError::Validation("bad b".into()));
    }
}
