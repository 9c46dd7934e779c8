//! `/notifications` endpoints.

use attest_core::entities::{Notification, UnreadCount, UpdatedCount};
use attest_core::filters::ReadFilter;
use reqwest::Method;

use crate::{ApiClient, ClientError, Query, push_opt};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn list_notifications(
        &self,
        read: ReadFilter,
        skip: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Vec<Notification>, ClientError> {
        let mut query = Query::new();
        push_opt(&mut query, "read", read.as_query());
        push_opt(&mut query, "skip", skip);
        push_opt(&mut query, "limit", limit);
        self.get("/notifications", &query).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn unread_notification_count(&self) -> Result<u64, ClientError> {
        let count: UnreadCount = self.get("/notifications/unread/count", &Query::new()).await?;
        Ok(count.count)
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn mark_notification_read(&self, id: i64) -> Result<Notification, ClientError> {
        self.fetch(self.request(Method::PUT, &format!("/notifications/{id}/read")))
            .await
    }

    /// Returns how many notifications changed state.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn mark_all_notifications_read(&self) -> Result<u64, ClientError> {
        let updated: UpdatedCount = self
            .fetch(self.request(Method::PUT, "/notifications/read-all"))
            .await?;
        Ok(updated.updated)
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or status failure.
    pub async fn delete_notification(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/notifications/{id}")).await
    }
}
