//! `/users` endpoints.

use attest_core::entities::{PasswordChange, User, UserCreate, UserUpdate};
use reqwest::Method;

use crate::{ApiClient, ClientError, Query, push_opt};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn list_users(&self, organization_id: Option<i64>) -> Result<Vec<User>, ClientError> {
        let mut query = Query::new();
        push_opt(&mut query, "organization_id", organization_id);
        self.get("/users", &query).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn get_user(&self, id: i64) -> Result<User, ClientError> {
        self.get(&format!("/users/{id}"), &Query::new()).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn create_user(&self, data: &UserCreate) -> Result<User, ClientError> {
        self.post("/users", data).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn update_user(&self, id: i64, data: &UserUpdate) -> Result<User, ClientError> {
        self.put(&format!("/users/{id}"), data).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or status failure.
    pub async fn delete_user(&self, id: i64) -> Result<(), ClientError> {
        self.delete(&format!("/users/{id}")).await
    }

    /// Change the caller's own password. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or status failure.
    pub async fn change_password(&self, data: &PasswordChange) -> Result<(), ClientError> {
        self.execute(self.request(Method::POST, "/users/me/change-password").json(data))
            .await
    }
}
