//! Login form

use zeroize::Zeroize;

use super::validation::{validate_email, validate_password_present};
use super::FormErrors;
use crate::error::EconomyResult;
use crate::models::Credentials;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub errors: FormErrors<LoginField>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_field(&mut self, field: LoginField, value: impl Into<String>) {
        let value = value.into();
        match field {
            LoginField::Email => self.email = value,
            LoginField::Password => {
                self.password.zeroize();
                self.password = value;
            }
        }
        self.errors.touch(field);
    }

    pub fn validate(&mut self) -> bool {
        self.errors.clear();
        let email_ok = self.errors.check(LoginField::Email, validate_email(&self.email));
        let password_ok = self
            .errors
            .check(LoginField::Password, validate_password_present(&self.password));
        email_ok && password_ok
    }

    pub fn set_general_error(&mut self, message: impl Into<String>) {
        self.errors.set_general(message);
    }

    pub fn clear(&mut self) {
        self.email.clear();
        self.password.zeroize();
        self.errors.clear();
    }

    /// Validated sign-in payload with the email normalized
    pub fn to_request(&mut self) -> EconomyResult<Credentials> {
        if !self.validate() {
            return Err(self.errors.to_error());
        }
        Ok(Credentials::new(
            self.email.trim().to_lowercase(),
            self.password.clone(),
        ))
    }
}

impl Drop for LoginForm {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}
