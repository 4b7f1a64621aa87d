//! Field validators shared by the forms.
//!
//! Each validator returns the message to show next to the field.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::format::{age_on, is_valid_currency, parse_brazilian_date};
use crate::models::MonthKey;

/// Minimum age to create an account
pub const MIN_SIGNUP_AGE: i32 = 13;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_NAME_LEN: usize = 2;

lazy_static! {
    /// Something@something.something, no whitespace
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email.trim())
}

pub fn validate_email(email: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Email is required".to_string());
    }
    if !is_valid_email(email) {
        return Err("Invalid email".to_string());
    }
    Ok(())
}

/// Login only checks presence; length is enforced at sign-up
pub fn validate_password_present(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), String> {
    validate_password_present(password)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(())
}

pub fn validate_confirmation(password: &str, confirmation: &str) -> Result<(), String> {
    if confirmation.is_empty() {
        return Err("Password confirmation is required".to_string());
    }
    if password != confirmation {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required".to_string());
    }
    if name.chars().count() < MIN_NAME_LEN {
        return Err(format!("Name must be at least {} characters", MIN_NAME_LEN));
    }
    Ok(())
}

/// `DD/MM/AAAA`, a real date, and at least [`MIN_SIGNUP_AGE`] on `today`
pub fn validate_birth_date(input: &str, today: NaiveDate) -> Result<(), String> {
    if input.trim().is_empty() {
        return Err("Birth date is required".to_string());
    }
    let birth = parse_brazilian_date(input).ok_or_else(|| "Invalid birth date".to_string())?;
    if age_on(birth, today) < MIN_SIGNUP_AGE {
        return Err(format!("You must be at least {} years old", MIN_SIGNUP_AGE));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), String> {
    if description.trim().is_empty() {
        return Err("Description is required".to_string());
    }
    Ok(())
}

/// A BRL amount greater than zero
pub fn validate_amount(amount: &str) -> Result<(), String> {
    if amount.trim().is_empty() {
        return Err("Amount is required".to_string());
    }
    if !is_valid_currency(amount) {
        return Err("Enter an amount greater than zero".to_string());
    }
    Ok(())
}

pub fn validate_month(month: &str) -> Result<(), String> {
    if month.trim().is_empty() {
        return Err("Reference month is required".to_string());
    }
    MonthKey::parse(month.trim())
        .map(|_| ())
        .map_err(|_| "Reference month must be YYYY-MM".to_string())
}
