//! Monthly limit service

use std::sync::Arc;

use crate::api::{endpoints, ApiClient, MessageResponse, Wrapped};
use crate::error::{EconomyError, EconomyResult};
use crate::models::{Limit, LimitUpdate, MonthKey, NewLimit};

/// Service for monthly spending limits
pub struct LimitService {
    client: Arc<ApiClient>,
}

impl LimitService {
    /// Create a new limit service
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Set the limit for a month
    pub async fn create(&self, limit: &NewLimit) -> EconomyResult<Limit> {
        if !limit.amount.is_positive() {
            return Err(EconomyError::validation("Limit must be greater than zero"));
        }
        tracing::debug!(month = %limit.month, "Creating limit");

        let created = self
            .client
            .post::<_, Limit>(endpoints::LIMIT, limit)
            .await?
            .ok_or_else(|| EconomyError::MalformedResponse {
                endpoint: self.client.url(endpoints::LIMIT),
                detail: "empty response body".into(),
            })?;
        warn_missing_ids(std::slice::from_ref(&created));
        Ok(created)
    }

    /// Limit for a month; `None` when the backend answers 204
    ///
    /// This endpoint never includes the record id.
    pub async fn get_by_month(&self, month: &MonthKey) -> EconomyResult<Option<Limit>> {
        let limit = self.client.get::<Limit>(&endpoints::limit_by_month(month)).await?;
        if let Some(limit) = &limit {
            warn_missing_ids(std::slice::from_ref(limit));
        }
        Ok(limit)
    }

    /// Every limit of the user
    pub async fn list_all(&self) -> EconomyResult<Vec<Limit>> {
        let limits = self
            .client
            .get::<Vec<Limit>>(endpoints::LIMITS)
            .await?
            .unwrap_or_default();
        warn_missing_ids(&limits);
        Ok(limits)
    }

    /// Change the amount of an existing limit
    pub async fn update(&self, id: Option<u64>, update: &LimitUpdate) -> EconomyResult<Limit> {
        let id = id.ok_or_else(|| EconomyError::invalid_id("limit"))?;
        if !update.amount.is_positive() {
            return Err(EconomyError::validation("Limit must be greater than zero"));
        }

        let path = endpoints::limit(id);
        tracing::debug!(id, "Updating limit");
        self.client
            .put::<_, Wrapped<Limit>>(&path, update)
            .await?
            .map(Wrapped::into_inner)
            .ok_or_else(|| EconomyError::MalformedResponse {
                endpoint: self.client.url(&path),
                detail: "empty response body".into(),
            })
    }

    /// Delete a limit, returning the backend's confirmation message
    pub async fn delete(&self, id: Option<u64>) -> EconomyResult<Option<String>> {
        let id = id.ok_or_else(|| EconomyError::invalid_id("limit"))?;
        tracing::debug!(id, "Deleting limit");
        let response = self
            .client
            .delete::<MessageResponse>(&endpoints::limit(id))
            .await?;
        Ok(response.and_then(|r| r.message))
    }
}

fn warn_missing_ids(limits: &[Limit]) {
    let missing = limits.iter().filter(|l| !l.can_modify()).count();
    if missing > 0 {
        tracing::warn!(
            missing,
            total = limits.len(),
            "Backend returned limits without an id; they will be read-only"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::MemoryCredentialStore;

    fn service() -> LimitService {
        let client = ApiClient::new(
            "http://127.0.0.1:9/api",
            Arc::new(MemoryCredentialStore::new()),
        )
        .unwrap();
        LimitService::new(Arc::new(client))
    }

    #[tokio::test]
    async fn test_update_without_id_is_rejected_locally() {
        let update = LimitUpdate {
            amount: Money::from_cents(150_000),
        };
        let err = service().update(None, &update).await.unwrap_err();
        assert_eq!(err, EconomyError::invalid_id("limit"));
    }

    #[tokio::test]
    async fn test_delete_without_id_is_rejected_locally() {
        let err = service().delete(None).await.unwrap_err();
        assert_eq!(err.user_message(), "Invalid limit ID");
    }
}
