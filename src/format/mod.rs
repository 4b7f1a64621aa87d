//! Formatting and input helpers shared by forms and the CLI
//!
//! Amount formatting itself lives on [`Money`](crate::models::Money).

pub mod currency;
pub mod date;

pub use currency::{format_currency_input, is_valid_currency, is_valid_number, parse_currency_input};
pub use date::{age_on, date_to_iso, format_date_input, iso_to_brazilian, parse_brazilian_date, validate_date};
