//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. On the wire the backend speaks reais as JSON numbers (`12.5`), so
//! serialization converts at the boundary. Display follows the Brazilian
//! locale: `.` groups thousands and `,` separates the cents.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents
///
/// Arithmetic saturates at the `i64` bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use economy_cli::models::Money;
    /// let amount = Money::from_cents(1050); // R$ 10,50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from a floating-point number of reais,
    /// rounded to the nearest cent
    ///
    /// Returns `None` when the value is not finite or its cents do not fit
    /// in an `i64`.
    pub fn try_from_reais(reais: f64) -> Option<Self> {
        // 2^63, the first magnitude past i64::MAX
        const BOUND: f64 = 9_223_372_036_854_775_808.0;

        let cents = (reais * 100.0).round();
        if cents.is_finite() && (-BOUND..BOUND).contains(&cents) {
            Some(Self(cents as i64))
        } else {
            None
        }
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount as reais
    pub fn as_reais(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Format in the Brazilian locale without a symbol, e.g. `"2.130,00"`
    pub fn format_brl(&self) -> String {
        let units = (self.0 / 100).unsigned_abs().to_string();
        let cents = (self.0 % 100).unsigned_abs();

        let mut grouped = String::with_capacity(units.len() + units.len() / 3);
        for (i, ch) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{},{:02}", sign, grouped, cents)
    }

    /// Format with the real prefix, e.g. `"R$ 2.130,00"`
    pub fn format_brl_with_prefix(&self) -> String {
        self.format_with_symbol("R$")
    }

    /// Format with an arbitrary currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{} {}", symbol, self.format_brl())
    }

    /// Parse a Brazilian-formatted amount
    ///
    /// Accepts `"2.130,00"`, `"2130,00"`, `"2130"`, `"R$ 10,50"` and a
    /// leading `-`. Dots are always thousands separators.
    pub fn parse_brl(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let s = s.strip_prefix("R$").unwrap_or(s).trim();

        if s.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped.trim_start()),
            None => (false, s),
        };

        let cleaned = s.replace('.', "");
        let (units, fraction) = match cleaned.split_once(',') {
            Some((units, fraction)) => (units, fraction),
            None => (cleaned.as_str(), ""),
        };

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (units.is_empty() && fraction.is_empty()) || !all_digits(units) || !all_digits(fraction)
        {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let units: i64 = if units.is_empty() {
            0
        } else {
            units
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
        };

        // Round to cents on the third fractional digit
        let digits: Vec<i64> = fraction
            .chars()
            .take(3)
            .filter_map(|c| c.to_digit(10).map(i64::from))
            .collect();
        let mut cents = digits.first().copied().unwrap_or(0) * 10 + digits.get(1).copied().unwrap_or(0);
        if digits.get(2).copied().unwrap_or(0) >= 5 {
            cents += 1;
        }

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(|| MoneyParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -total } else { total }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_brl_with_prefix())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_reais())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let reais = f64::deserialize(deserializer)?;
        Self::try_from_reais(reais)
            .ok_or_else(|| serde::de::Error::custom(format!("amount out of range: {}", reais)))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "Amount is empty"),
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl() {
        assert_eq!(Money::from_cents(213000).format_brl(), "2.130,00");
        assert_eq!(Money::from_cents(5).format_brl(), "0,05");
        assert_eq!(Money::from_cents(123456789).format_brl(), "1.234.567,89");
        assert_eq!(Money::from_cents(-1050).format_brl(), "-10,50");
        assert_eq!(Money::zero().format_brl(), "0,00");
    }

    #[test]
    fn test_display_has_prefix() {
        assert_eq!(format!("{}", Money::from_cents(213000)), "R$ 2.130,00");
    }

    #[test]
    fn test_parse_brl() {
        assert_eq!(Money::parse_brl("2.130,00").unwrap().cents(), 213000);
        assert_eq!(Money::parse_brl("2130,00").unwrap().cents(), 213000);
        assert_eq!(Money::parse_brl("2130").unwrap().cents(), 213000);
        assert_eq!(Money::parse_brl("R$ 10,50").unwrap().cents(), 1050);
        assert_eq!(Money::parse_brl("0,5").unwrap().cents(), 50);
        assert_eq!(Money::parse_brl("-10,50").unwrap().cents(), -1050);
        assert_eq!(Money::parse_brl("1,005").unwrap().cents(), 101);
    }

    #[test]
    fn test_parse_brl_rejects_garbage() {
        assert_eq!(Money::parse_brl(""), Err(MoneyParseError::Empty));
        assert!(Money::parse_brl("abc").is_err());
        assert!(Money::parse_brl("12,3,4").is_err());
        assert!(Money::parse_brl(",").is_err());
    }

    #[test]
    fn test_format_then_parse_is_identity() {
        for cents in [0, 1, 99, 100, 12345, 100_000, 987_654_321] {
            let m = Money::from_cents(cents);
            assert_eq!(Money::parse_brl(&m.format_brl()).unwrap(), m);
            assert_eq!(Money::parse_brl(&m.format_brl_with_prefix()).unwrap(), m);
        }
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(15000);
        let b = Money::from_cents(10000);

        assert_eq!((a - b).cents(), 5000);
        assert_eq!((a + b).cents(), 25000);
        assert_eq!((-a).cents(), -15000);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![Money::from_cents(100), Money::from_cents(250)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 350);
    }

    #[test]
    fn test_wire_format_is_reais() {
        let m = Money::from_cents(1250);
        assert_eq!(serde_json::to_string(&m).unwrap(), "12.5");

        let parsed: Money = serde_json::from_str("12.5").unwrap();
        assert_eq!(parsed, m);

        let parsed: Money = serde_json::from_str("100").unwrap();
        assert_eq!(parsed.cents(), 10000);

        let parsed: Money = serde_json::from_str("0.1").unwrap();
        assert_eq!(parsed.cents(), 10);
    }

    #[test]
    fn test_out_of_range_amount_is_rejected() {
        assert!(serde_json::from_str::<Money>("1e17").is_err());
        assert!(serde_json::from_str::<Money>("-1e17").is_err());
        assert!(serde_json::from_str::<Money>("9e16").is_ok());
        assert_eq!(Money::try_from_reais(f64::NAN), None);
        assert_eq!(Money::try_from_reais(12.345), Some(Money::from_cents(1235)));
    }

    #[test]
    fn test_sum_saturates() {
        let huge = Money::from_cents(i64::MAX - 10);
        let total: Money = [huge, huge, Money::from_cents(1)].iter().sum();
        assert_eq!(total.cents(), i64::MAX);
        assert_eq!((Money::from_cents(i64::MIN) - huge).cents(), i64::MIN);
        assert_eq!((-Money::from_cents(i64::MIN)).cents(), i64::MAX);
    }
}
