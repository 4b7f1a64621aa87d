//! Expense records
//!
//! Some list endpoints omit `id`; records are kept exactly as received and
//! `can_modify()` tells callers whether edit/delete is possible.

use serde::{Deserialize, Serialize};

use super::{Money, MonthKey};

/// An expense as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(default, alias = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(rename = "descricao")]
    pub description: String,

    #[serde(rename = "valor")]
    pub amount: Money,

    #[serde(rename = "mesReferencia")]
    pub month: MonthKey,
}

impl Expense {
    /// Whether this record can be edited or deleted
    pub fn can_modify(&self) -> bool {
        self.id.is_some()
    }
}

/// Body for `POST /despesa`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewExpense {
    #[serde(rename = "descricao")]
    pub description: String,

    #[serde(rename = "valor")]
    pub amount: Money,

    #[serde(rename = "mesReferencia")]
    pub month: MonthKey,
}

/// Body for `PUT /despesa/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseUpdate {
    #[serde(rename = "descricao")]
    pub description: String,

    #[serde(rename = "valor")]
    pub amount: Money,
}

/// Total of a set of expenses
pub fn total_spent(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}
