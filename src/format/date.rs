//! Date input helpers
//!
//! User-facing dates use `DD/MM/AAAA`; the backend wants ISO `AAAA-MM-DD`.

use chrono::{Datelike, NaiveDate};

const BRAZILIAN_FORMAT: &str = "%d/%m/%Y";
const ISO_FORMAT: &str = "%Y-%m-%d";

/// Apply the `DD/MM/AAAA` mask to whatever digits were typed
///
/// `"0101"` → `"01/01"`, `"01012000"` → `"01/01/2000"`. Extra digits past
/// the year are dropped.
pub fn format_date_input(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).take(8).collect();

    let mut out = String::with_capacity(10);
    for (i, c) in digits.iter().enumerate() {
        if (i == 2 || i == 4) && digits.len() > i {
            out.push('/');
        }
        out.push(*c);
    }
    out
}

/// Parse a strict `DD/MM/AAAA` date
pub fn parse_brazilian_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    let bytes = input.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[2] == b'/'
        && bytes[5] == b'/'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(input, BRAZILIAN_FORMAT).ok()
}

/// Whether `input` is a real calendar date in `DD/MM/AAAA`
pub fn validate_date(input: &str) -> bool {
    parse_brazilian_date(input).is_some()
}

/// `DD/MM/AAAA` → `AAAA-MM-DD`
pub fn date_to_iso(input: &str) -> Option<String> {
    parse_brazilian_date(input).map(|d| d.format(ISO_FORMAT).to_string())
}

/// `AAAA-MM-DD` (optionally followed by a time part) → `DD/MM/AAAA`
pub fn iso_to_brazilian(input: &str) -> Option<String> {
    let date_part = input.trim().get(..10)?;
    NaiveDate::parse_from_str(date_part, ISO_FORMAT)
        .ok()
        .map(|d| d.format(BRAZILIAN_FORMAT).to_string())
}

/// Completed years between `birth` and `today`
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}
