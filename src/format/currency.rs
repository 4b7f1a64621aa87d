//! Currency input helpers (Brazilian locale)

use crate::models::Money;

/// More digits than this would overflow the cent count
const MAX_INPUT_DIGITS: usize = 15;

/// Format raw keystrokes as an amount, treating the digits as cents
///
/// `"1"` → `"0,01"`, `"123"` → `"1,23"`, `"123456"` → `"1.234,56"`.
/// Non-digits are ignored; no digits at all yields `""`.
pub fn format_currency_input(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_INPUT_DIGITS)
        .collect();
    if digits.is_empty() {
        return String::new();
    }

    match digits.parse::<i64>() {
        Ok(cents) => Money::from_cents(cents).format_brl(),
        Err(_) => String::new(),
    }
}

/// Parse the output of [`format_currency_input`] (or any BRL amount)
pub fn parse_currency_input(input: &str) -> Option<Money> {
    Money::parse_brl(input).ok()
}

/// A non-empty amount that parses and is not negative
pub fn is_valid_number(input: &str) -> bool {
    parse_currency_input(input).is_some_and(|m| !m.is_negative())
}

/// A non-empty amount that parses and is strictly positive
pub fn is_valid_currency(input: &str) -> bool {
    parse_currency_input(input).is_some_and(|m| m.is_positive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keystrokes_grow_left_of_comma() {
        let typed = ["1", "12", "123", "1234", "12345", "123456"];
        let expected = ["0,01", "0,12", "1,23", "12,34", "123,45", "1.234,56"];
        for (raw, want) in typed.iter().zip(expected) {
            assert_eq!(format_currency_input(raw), want);
        }
    }

    #[test]
    fn test_reformatting_formatted_input() {
        // The field keeps its own formatted text and appends a keystroke
        assert_eq!(format_currency_input("1,234"), "12,34");
        assert_eq!(format_currency_input("R$ 0,015"), "0,15");
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(format_currency_input(""), "");
        assert_eq!(format_currency_input("abc"), "");
        assert_eq!(format_currency_input("000"), "0,00");
    }

    #[test]
    fn test_long_input_does_not_overflow() {
        let raw = "9".repeat(40);
        assert!(!format_currency_input(&raw).is_empty());
    }

    #[test]
    fn test_validity() {
        assert!(is_valid_number("0,00"));
        assert!(!is_valid_currency("0,00"));
        assert!(is_valid_currency("2.130,00"));
        assert!(!is_valid_number(""));
        assert!(!is_valid_number("   "));
        assert!(!is_valid_number("abc"));
        assert!(!is_valid_number("-5,00"));
    }
}
