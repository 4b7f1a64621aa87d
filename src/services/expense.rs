//! Expense service
//!
//! CRUD over `/despesa` and the month/all listings. Empty listings come back
//! as 204 and are returned as an empty `Vec`.

use std::sync::Arc;

use crate::api::{endpoints, ApiClient, MessageResponse, Wrapped};
use crate::error::{EconomyError, EconomyResult};
use crate::models::{Expense, ExpenseUpdate, MonthKey, NewExpense};

/// Service for expense records
pub struct ExpenseService {
    client: Arc<ApiClient>,
}

impl ExpenseService {
    /// Create a new expense service
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Create an expense
    pub async fn create(&self, expense: &NewExpense) -> EconomyResult<Expense> {
        validate_new(expense)?;
        tracing::debug!(month = %expense.month, "Creating expense");

        let created = self
            .client
            .post::<_, Expense>(endpoints::EXPENSE, expense)
            .await?
            .ok_or_else(|| EconomyError::MalformedResponse {
                endpoint: self.client.url(endpoints::EXPENSE),
                detail: "empty response body".into(),
            })?;
        warn_missing_ids(std::slice::from_ref(&created));
        Ok(created)
    }

    /// Expenses for one reference month
    pub async fn list_by_month(&self, month: &MonthKey) -> EconomyResult<Vec<Expense>> {
        let path = endpoints::expenses_by_month(month);
        let expenses = self
            .client
            .get::<Vec<Expense>>(&path)
            .await?
            .unwrap_or_default();
        warn_missing_ids(&expenses);
        Ok(expenses)
    }

    /// Every expense of the user
    pub async fn list_all(&self) -> EconomyResult<Vec<Expense>> {
        let expenses = self
            .client
            .get::<Vec<Expense>>(endpoints::EXPENSES)
            .await?
            .unwrap_or_default();
        warn_missing_ids(&expenses);
        Ok(expenses)
    }

    /// Update description and amount of an existing expense
    pub async fn update(&self, id: Option<u64>, update: &ExpenseUpdate) -> EconomyResult<Expense> {
        let id = id.ok_or_else(|| EconomyError::invalid_id("expense"))?;
        if update.description.trim().is_empty() {
            return Err(EconomyError::validation("Description is required"));
        }
        if !update.amount.is_positive() {
            return Err(EconomyError::validation("Amount must be greater than zero"));
        }

        let path = endpoints::expense(id);
        tracing::debug!(id, "Updating expense");
        self.client
            .put::<_, Wrapped<Expense>>(&path, update)
            .await?
            .map(Wrapped::into_inner)
            .ok_or_else(|| EconomyError::MalformedResponse {
                endpoint: self.client.url(&path),
                detail: "empty response body".into(),
            })
    }

    /// Delete an expense, returning the backend's confirmation message
    pub async fn delete(&self, id: Option<u64>) -> EconomyResult<Option<String>> {
        let id = id.ok_or_else(|| EconomyError::invalid_id("expense"))?;
        tracing::debug!(id, "Deleting expense");
        let response = self
            .client
            .delete::<MessageResponse>(&endpoints::expense(id))
            .await?;
        Ok(response.and_then(|r| r.message))
    }
}

fn validate_new(expense: &NewExpense) -> EconomyResult<()> {
    if expense.description.trim().is_empty() {
        return Err(EconomyError::validation("Description is required"));
    }
    if !expense.amount.is_positive() {
        return Err(EconomyError::validation("Amount must be greater than zero"));
    }
    Ok(())
}

fn warn_missing_ids(expenses: &[Expense]) {
    let missing = expenses.iter().filter(|e| !e.can_modify()).count();
    if missing > 0 {
        tracing::warn!(
            missing,
            total = expenses.len(),
            "Backend returned expenses without an id; they will be read-only"
        );
    }
}
