//! Reference month representation
//!
//! Expenses and limits are keyed by a `YYYY-MM` month. The backend sometimes
//! echoes a full timestamp instead, so parsing keeps only the first seven
//! characters of anything that looks like an ISO date.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// A `YYYY-MM` reference month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key, validating the month number
    pub fn new(year: i32, month: u32) -> Result<Self, MonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }
        if !(0..=9999).contains(&year) {
            return Err(MonthParseError::InvalidFormat(format!("{}-{}", year, month)));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current local month
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Get the next month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Get the previous month
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Shift by a signed number of months
    pub fn offset(&self, months: i32) -> Self {
        let index = self.year * 12 + (self.month as i32 - 1) + months;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// Human label, e.g. `Janeiro/2025`
    pub fn label(&self) -> String {
        format!("{}/{}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }

    /// Parse a month as sent by the backend: `YYYY-MM` or a full ISO
    /// date/timestamp
    pub fn from_backend_date(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        if s.len() > 7 && (s.contains('T') || s.len() == 10) {
            return s
                .get(..7)
                .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))
                .and_then(Self::parse);
        }
        Self::parse(s)
    }

    /// Parse a strict `YYYY-MM` month
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        if year.len() != 4 || month.len() != 2 {
            return Err(MonthParseError::InvalidFormat(s.to_string()));
        }

        let year: i32 = year
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = MonthParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_backend_date(&value)
    }
}

impl From<MonthKey> for String {
    fn from(value: MonthKey) -> Self {
        value.to_string()
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => {
                write!(f, "Invalid month format: {} (use YYYY-MM)", s)
            }
            MonthParseError::InvalidMonth(m) => write!(f, "Month must be between 1 and 12, got {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(year: i32, month: u32) -> MonthKey {
        MonthKey::new(year, month).unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let key = MonthKey::parse("2025-01").unwrap();
        assert_eq!(key, month(2025, 1));
        assert_eq!(key.to_string(), "2025-01");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            MonthKey::parse("2025-13"),
            Err(MonthParseError::InvalidMonth(13))
        );
        assert!(MonthKey::parse("2025-1").is_err());
        assert!(MonthKey::parse("January").is_err());
        assert!(MonthKey::parse("").is_err());
    }

    #[test]
    fn test_navigation_wraps_years() {
        assert_eq!(month(2024, 12).next(), month(2025, 1));
        assert_eq!(month(2025, 1).prev(), month(2024, 12));
        assert_eq!(month(2025, 3).offset(-15), month(2023, 12));
        assert_eq!(month(2025, 11).offset(3), month(2026, 2));
    }

    #[test]
    fn test_label() {
        assert_eq!(month(2025, 1).label(), "Janeiro/2025");
        assert_eq!(month(2024, 3).label(), "Março/2024");
    }

    #[test]
    fn test_from_backend_date() {
        assert_eq!(
            MonthKey::from_backend_date("2025-02-01T00:00:00Z").unwrap(),
            month(2025, 2)
        );
        assert_eq!(MonthKey::from_backend_date("2025-02-01").unwrap(), month(2025, 2));
        assert_eq!(MonthKey::from_backend_date("2025-02").unwrap(), month(2025, 2));
    }

    #[test]
    fn test_serde_as_string() {
        let key = month(2025, 7);
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"2025-07\"");
        let parsed: MonthKey = serde_json::from_str("\"2025-07-01T00:00:00Z\"").unwrap();
        assert_eq!(parsed, key);
    }
}
