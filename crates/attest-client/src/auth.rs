//! `/auth` endpoints.

use attest_core::entities::User;
use reqwest::Method;
use serde::Deserialize;

use crate::{ApiClient, ClientError, Query};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

impl ApiClient {
    /// Exchange credentials for a token, load the user and persist the
    /// session.
    ///
    /// Neither request goes through the 401 handler: the form is posted
    /// without a bearer header and `/auth/me` is called with the new token
    /// directly. The held session is only replaced once both succeed, so a
    /// failed login leaves an existing session untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Login`] when the credentials are rejected or the
    /// token or user cannot be obtained, and the usual transport/API errors
    /// otherwise.
    pub async fn login(&self, username: &str, password: &str) -> Result<User, ClientError> {
        let builder = self
            .anonymous(Method::POST, "/auth/login")
            .form(&[("username", username), ("password", password)]);
        let response: TokenResponse = self.fetch_detached(builder).await.map_err(rejected)?;

        let token = response
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ClientError::Login(self.text("errors.token_missing")))?;

        let builder = self.anonymous(Method::GET, "/auth/me").bearer_auth(&token);
        let user: User = self.fetch_detached(builder).await.map_err(|error| match error {
            ClientError::Decode(_) => ClientError::Login(self.text("errors.user_missing")),
            other => rejected(other),
        })?;

        self.session.establish(token, user.clone())?;
        tracing::debug!(user_id = user.id, "logged in");
        Ok(user)
    }

    /// The user owning the current token.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport, status or decode failure.
    pub async fn me(&self) -> Result<User, ClientError> {
        self.get("/auth/me", &Query::new()).await
    }

    /// Drop the session locally. The backend keeps no server-side session.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Auth`] when the persisted session cannot be
    /// removed.
    pub fn logout(&self) -> Result<(), ClientError> {
        self.session.clear().map_err(ClientError::from)
    }

    fn text(&self, key: &str) -> String {
        self.locale.text_or(key, key).to_string()
    }
}

/// A 401 during login means bad credentials, not an expired session.
fn rejected(error: ClientError) -> ClientError {
    match error {
        ClientError::Unauthorized { message } => ClientError::Login(message),
        other => other,
    }
}
