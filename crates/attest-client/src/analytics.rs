//! `/analytics` endpoints.

use attest_core::entities::{DashboardStats, TimelinePoint};

use crate::{ApiClient, ClientError, Query, push_opt};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn dashboard_stats(&self, project_id: Option<i64>) -> Result<DashboardStats, ClientError> {
        let mut query = Query::new();
        push_opt(&mut query, "project_id", project_id);
        self.get("/analytics/dashboard", &query).await
    }

    /// Findings created per day over the last `days`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn findings_timeline(
        &self,
        days: Option<u32>,
        project_id: Option<i64>,
    ) -> Result<Vec<TimelinePoint>, ClientError> {
        let mut query = Query::new();
        push_opt(&mut query, "days", days);
        push_opt(&mut query, "project_id", project_id);
        self.get("/analytics/findings-timeline", &query).await
    }
}
