//! `/activity` endpoints.

use attest_core::entities::{ActivityFilters, ActivityLog};

use crate::{ApiClient, ClientError, Query, push_opt};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn list_activity(&self, filters: &ActivityFilters) -> Result<Vec<ActivityLog>, ClientError> {
        let mut query = Query::new();
        push_opt(&mut query, "entity_type", filters.entity_type.as_deref());
        push_opt(&mut query, "entity_id", filters.entity_id);
        push_opt(&mut query, "action", filters.action.as_deref());
        push_opt(&mut query, "user_id", filters.user_id);
        push_opt(&mut query, "skip", filters.skip);
        push_opt(&mut query, "limit", filters.limit);
        self.get("/activity", &query).await
    }

    /// History of a single entity.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn entity_activity(
        &self,
        entity_type: &str,
        entity_id: i64,
        skip: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Vec<ActivityLog>, ClientError> {
        let mut query = Query::new();
        push_opt(&mut query, "skip", skip);
        push_opt(&mut query, "limit", limit);
        let path = format!(
            "/activity/{}/{entity_id}",
            urlencoding::encode(entity_type)
        );
        self.get(&path, &query).await
    }
}
