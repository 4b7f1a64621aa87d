//! Monthly spending limits

use serde::{Deserialize, Serialize};

use super::{Money, MonthKey};

/// A monthly limit as returned by the backend
///
/// `GET /limite/mes/{m}` answers without an `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limit {
    #[serde(default, alias = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(rename = "valor")]
    pub amount: Money,

    #[serde(rename = "mesReferencia")]
    pub month: MonthKey,
}

impl Limit {
    /// Whether this record can be edited or deleted
    pub fn can_modify(&self) -> bool {
        self.id.is_some()
    }

    /// The limit amount, treating zero as "no limit set"
    pub fn effective_amount(&self) -> Option<Money> {
        if self.amount.is_positive() {
            Some(self.amount)
        } else {
            None
        }
    }
}

/// Body for `POST /limite`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewLimit {
    #[serde(rename = "valor")]
    pub amount: Money,

    #[serde(rename = "mesReferencia")]
    pub month: MonthKey,
}

/// Body for `PUT /limite/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LimitUpdate {
    #[serde(rename = "valor")]
    pub amount: Money,
}
