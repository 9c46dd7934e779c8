//! `/organizations` endpoints.

use attest_core::entities::{Organization, OrganizationCreate, OrganizationUpdate};

use crate::{ApiClient, ClientError, Query};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn list_organizations(&self) -> Result<Vec<Organization>, ClientError> {
        self.get("/organizations", &Query::new()).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn get_organization(&self, id: i64) -> Result<Organization, ClientError> {
        self.get(&format!("/organizations/{id}"), &Query::new()).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn create_organization(
        &self,
        data: &OrganizationCreate,
    ) -> Result<Organization, ClientError> {
        self.post("/organizations", data).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn update_organization(
        &self,
        id: i64,
        data: &OrganizationUpdate,
    ) -> Result<Organization, ClientError> {
        self.put(&format!("/organizations/{id}"), data).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or status failure.
    pub async fn delete_organization(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/organizations/{id}")).await
    }
}
