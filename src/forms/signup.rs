//! Sign-up form

use chrono::{Local, NaiveDate};
use zeroize::Zeroize;

use super::validation::{
    validate_birth_date, validate_confirmation, validate_email, validate_name, validate_password,
};
use super::FormErrors;
use crate::error::{EconomyError, EconomyResult};
use crate::format::{date_to_iso, format_date_input};
use crate::models::SignupRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignupField {
    Name,
    Email,
    BirthDate,
    Password,
    PasswordConfirmation,
}

#[derive(Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    /// Masked `DD/MM/AAAA`
    pub birth_date: String,
    pub password: String,
    pub password_confirmation: String,
    pub errors: FormErrors<SignupField>,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field; the birth date goes through the `DD/MM/AAAA` mask
    pub fn update_field(&mut self, field: SignupField, value: impl Into<String>) {
        let value = value.into();
        match field {
            SignupField::Name => self.name = value,
            SignupField::Email => self.email = value,
            SignupField::BirthDate => self.birth_date = format_date_input(&value),
            SignupField::Password => {
                self.password.zeroize();
                self.password = value;
            }
            SignupField::PasswordConfirmation => {
                self.password_confirmation.zeroize();
                self.password_confirmation = value;
            }
        }
        self.errors.touch(field);
    }

    pub fn validate(&mut self) -> bool {
        self.validate_on(Local::now().date_naive())
    }

    /// Validate with an explicit "today" for the minimum-age rule
    pub fn validate_on(&mut self, today: NaiveDate) -> bool {
        self.errors.clear();
        let checks = [
            self.errors.check(SignupField::Name, validate_name(&self.name)),
            self.errors.check(SignupField::Email, validate_email(&self.email)),
            self.errors.check(
                SignupField::BirthDate,
                validate_birth_date(&self.birth_date, today),
            ),
            self.errors
                .check(SignupField::Password, validate_password(&self.password)),
            self.errors.check(
                SignupField::PasswordConfirmation,
                validate_confirmation(&self.password, &self.password_confirmation),
            ),
        ];
        checks.iter().all(|ok| *ok)
    }

    pub fn set_general_error(&mut self, message: impl Into<String>) {
        self.errors.set_general(message);
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.birth_date.clear();
        self.password.zeroize();
        self.password_confirmation.zeroize();
        self.errors.clear();
    }

    pub fn to_request(&mut self) -> EconomyResult<SignupRequest> {
        self.to_request_on(Local::now().date_naive())
    }

    /// Validated payload: trimmed name, lower-cased email, ISO birth date
    pub fn to_request_on(&mut self, today: NaiveDate) -> EconomyResult<SignupRequest> {
        if !self.validate_on(today) {
            return Err(self.errors.to_error());
        }
        let birth_date = date_to_iso(&self.birth_date)
            .ok_or_else(|| EconomyError::validation("Invalid birth date"))?;

        Ok(SignupRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            birth_date,
            password: self.password.clone(),
            password_confirmation: self.password_confirmation.clone(),
        })
    }
}

impl Drop for SignupForm {
    fn drop(&mut self) {
        self.password.zeroize();
        self.password_confirmation.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn filled() -> SignupForm {
        let mut form = SignupForm::new();
        form.update_field(SignupField::Name, "  Maria Silva ");
        form.update_field(SignupField::Email, "Maria@Example.com");
        form.update_field(SignupField::BirthDate, "15081995");
        form.update_field(SignupField::Password, "secret1");
        form.update_field(SignupField::PasswordConfirmation, "secret1");
        form
    }

    #[test]
    fn test_birth_date_is_masked() {
        let form = filled();
        assert_eq!(form.birth_date, "15/08/1995");
    }

    #[test]
    fn test_request_payload() {
        let request = filled().to_request_on(today()).unwrap();
        assert_eq!(request.name, "Maria Silva");
        assert_eq!(request.email, "maria@example.com");
        assert_eq!(request.birth_date, "1995-08-15");
        assert_eq!(request.password_confirmation, "secret1");
    }

    #[test]
    fn test_mismatched_confirmation() {
        let mut form = filled();
        form.update_field(SignupField::PasswordConfirmation, "secret2");
        assert!(!form.validate_on(today()));
        assert_eq!(
            form.errors.field(SignupField::PasswordConfirmation),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn test_too_young() {
        let mut form = filled();
        form.update_field(SignupField::BirthDate, "02/06/2012");
        assert!(!form.validate_on(today()));
        assert!(form.errors.field(SignupField::BirthDate).is_some());
    }

    #[test]
    fn test_empty_form_flags_every_field() {
        let mut form = SignupForm::new();
        assert!(!form.validate_on(today()));
        assert_eq!(form.errors.iter().count(), 5);
    }
}
