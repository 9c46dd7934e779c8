//! `/projects` endpoints.

use attest_core::entities::{Project, ProjectCreate, ProjectUpdate};
use reqwest::Method;

use crate::{ApiClient, ClientError, Query, push_opt};

impl ApiClient {
    /// Projects, optionally restricted to one organization.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn list_projects(&self, organization_id: Option<i64>) -> Result<Vec<Project>, ClientError> {
        let mut query = Query::new();
        push_opt(&mut query, "organization_id", organization_id);
        self.get("/projects", &query).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn get_project(&self, id: i64) -> Result<Project, ClientError> {
        self.get(&format!("/projects/{id}"), &Query::new()).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn create_project(&self, data: &ProjectCreate) -> Result<Project, ClientError> {
        self.post("/projects", data).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn update_project(&self, id: i64, data: &ProjectUpdate) -> Result<Project, ClientError> {
        self.put(&format!("/projects/{id}"), data).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or status failure.
    pub async fn delete_project(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/projects/{id}")).await
    }

    /// Duplicate a project with its audits and findings under `new_name`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn copy_project(&self, id: i64, new_name: &str) -> Result<Project, ClientError> {
        let builder = self
            .request(Method::POST, &format!("/projects/{id}/copy"))
            .query(&[("new_name", new_name)]);
        self.fetch(builder).await
    }
}
