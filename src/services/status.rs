//! Spending status for a month
//!
//! Compares the month's expenses against its limit and picks the display
//! state shown on the home screen / `economy status`.

use serde::Serialize;

use crate::models::{total_spent, Expense, Limit, Money};

/// Display state of a month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// No expenses and no limit
    NoData,
    /// Expenses logged but no limit to compare against
    ExpensesWithoutLimit,
    /// Spent more than the limit
    OverLimit,
    /// Spent at most the limit
    UnderLimit,
}

/// Result of [`classify`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpendingStatus {
    pub kind: StatusKind,
    pub message: String,
    /// Amount over the limit (`OverLimit`) or saved (`UnderLimit`); zero otherwise
    pub delta: Money,
    pub total_spent: Money,
    /// Effective limit; `None` when absent or zero
    pub limit: Option<Money>,
}

impl SpendingStatus {
    /// Fraction of the limit used, clamped to `0.0..=1.0`
    pub fn progress(&self) -> Option<f64> {
        let limit = self.limit?;
        let ratio = self.total_spent.cents() as f64 / limit.cents() as f64;
        Some(ratio.clamp(0.0, 1.0))
    }

    /// Whether a progress bar makes sense for this state
    pub fn shows_progress(&self) -> bool {
        matches!(self.kind, StatusKind::OverLimit | StatusKind::UnderLimit)
    }
}

/// Classify a month's expenses against its limit
///
/// A limit of zero counts as "no limit set".
pub fn classify(expenses: &[Expense], limit: Option<&Limit>) -> SpendingStatus {
    let total = total_spent(expenses);
    let effective = limit.and_then(Limit::effective_amount);

    let (kind, message, delta) = match effective {
        None if total.is_zero() => (StatusKind::NoData, "No progress found".to_string(), Money::zero()),
        None => (
            StatusKind::ExpensesWithoutLimit,
            "Set a monthly limit to track your progress".to_string(),
            Money::zero(),
        ),
        Some(limit) if total > limit => {
            let over = total - limit;
            (
                StatusKind::OverLimit,
                format!("Goal not reached: over by {}", over),
                over,
            )
        }
        Some(limit) => {
            let saved = limit - total;
            (
                StatusKind::UnderLimit,
                format!("Congratulations, you saved {}", saved),
                saved,
            )
        }
    };

    SpendingStatus {
        kind,
        message,
        delta,
        total_spent: total,
        limit: effective,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthKey;

    fn month() -> MonthKey {
        MonthKey::parse("2025-05").unwrap()
    }

    fn expense(reais: i64) -> Expense {
        Expense {
            id: Some(1),
            description: "Mercado".into(),
            amount: Money::from_cents(reais * 100),
            month: month(),
        }
    }

    fn limit(reais: i64) -> Limit {
        Limit {
            id: None,
            amount: Money::from_cents(reais * 100),
            month: month(),
        }
    }

    #[test]
    fn test_no_data() {
        let status = classify(&[], None);
        assert_eq!(status.kind, StatusKind::NoData);
        assert_eq!(status.delta, Money::zero());
        assert_eq!(status.progress(), None);
    }

    #[test]
    fn test_expenses_without_limit() {
        let status = classify(&[expense(30)], None);
        assert_eq!(status.kind, StatusKind::ExpensesWithoutLimit);
        assert_eq!(status.total_spent, Money::from_cents(3000));
        assert!(!status.shows_progress());
    }

    #[test]
    fn test_over_limit() {
        let status = classify(&[expense(100), expense(50)], Some(&limit(100)));
        assert_eq!(status.kind, StatusKind::OverLimit);
        assert_eq!(status.delta, Money::from_cents(5000));
        assert_eq!(status.progress(), Some(1.0));
    }

    #[test]
    fn test_under_limit() {
        let status = classify(&[expense(50)], Some(&limit(100)));
        assert_eq!(status.kind, StatusKind::UnderLimit);
        assert_eq!(status.delta, Money::from_cents(5000));
        assert_eq!(status.progress(), Some(0.5));
    }

    #[test]
    fn test_exactly_at_limit_is_under() {
        let status = classify(&[expense(100)], Some(&limit(100)));
        assert_eq!(status.kind, StatusKind::UnderLimit);
        assert_eq!(status.delta, Money::zero());
    }

    #[test]
    fn test_zero_limit_is_no_limit() {
        assert_eq!(classify(&[], Some(&limit(0))).kind, StatusKind::NoData);
        assert_eq!(
            classify(&[expense(10)], Some(&limit(0))).kind,
            StatusKind::ExpensesWithoutLimit
        );
    }

    #[test]
    fn test_limit_without_expenses() {
        let status = classify(&[], Some(&limit(200)));
        assert_eq!(status.kind, StatusKind::UnderLimit);
        assert_eq!(status.delta, Money::from_cents(20000));
        assert_eq!(status.progress(), Some(0.0));
    }

    #[test]
    fn test_huge_totals_do_not_overflow() {
        let mut big = expense(0);
        big.amount = Money::from_cents(i64::MAX / 2 + 1);
        let status = classify(&[big.clone(), big], Some(&limit(100)));
        assert_eq!(status.kind, StatusKind::OverLimit);
        assert_eq!(status.total_spent, Money::from_cents(i64::MAX));
    }
}
