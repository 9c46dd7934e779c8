//! # attest-client
//!
//! Typed HTTP client for the Attest REST backend.
//!
//! [`ApiClient`] owns a `reqwest::Client`, the base URL, the display locale
//! and a shared [`Session`]. Every request except login carries the session's
//! bearer token. Non-success responses are normalized into [`ClientError`];
//! a 401 clears the session before the error is returned.
//!
//! Endpoints are grouped one module per resource, each adding methods to
//! `ApiClient`:
//! - [`auth`]: login, current user, logout
//! - [`organizations`], [`projects`], [`audits`], [`findings`], [`templates`],
//!   [`users`]: CRUD plus resource-specific actions
//! - [`notifications`], [`activity`], [`analytics`]: read-mostly feeds

pub mod activity;
pub mod analytics;
pub mod audits;
pub mod auth;
pub mod findings;
pub mod notifications;
pub mod organizations;
pub mod projects;
pub mod templates;
pub mod users;

mod error;
mod http;

pub use audits::ReportFile;
pub use findings::FindingQuery;
pub use error::ClientError;
pub use http::{content_disposition_filename, extract_message};

use std::sync::Arc;
use std::time::Duration;

use attest_auth::Session;
use attest_config::ApiConfig;
use attest_core::Locale;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

/// Query string pairs; absent filters are simply not pushed.
pub(crate) type Query = Vec<(&'static str, String)>;

/// HTTP client bound to one backend and one session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
    locale: Locale,
}

impl ApiClient {
    /// Build a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Build`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: &ApiConfig, session: Arc<Session>, locale: Locale) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url(),
            session,
            locale,
        })
    }

    /// Build a client against an explicit base URL (already including the
    /// API prefix) with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Build`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        base_url: impl Into<String>,
        session: Arc<Session>,
        locale: Locale,
    ) -> Result<Self, ClientError> {
        let config = ApiConfig::default();
        let mut client = Self::new(&config, session, locale)?;
        client.base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(client)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn session(&self) -> &Arc<Session> {
        &self.session
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Request builder with the bearer token attached when one is held.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%method, %url, "api request");
        let builder = self.http.request(method, url);
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Request builder without credentials.
    pub(crate) fn anonymous(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%method, %url, "api request (anonymous)");
        self.http.request(method, url)
    }

    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<reqwest::Response, ClientError> {
        let resp = builder
            .send()
            .await
            .map_err(|e| http::transport_error(e, self.locale))?;
        http::check_response(resp, &self.session, self.locale).await
    }

    pub(crate) async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ClientError> {
        let resp = self.send(builder).await?;
        self.decode(resp).await
    }

    /// Send and decode without the 401 session side effect.
    pub(crate) async fn fetch_detached<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ClientError> {
        let resp = builder
            .send()
            .await
            .map_err(|e| http::transport_error(e, self.locale))?;
        let resp = http::check_status(resp, self.locale).await?;
        self.decode(resp).await
    }

    async fn decode<T: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<T, ClientError> {
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| http::transport_error(e, self.locale))?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
    }

    pub(crate) async fn execute(&self, builder: RequestBuilder) -> Result<(), ClientError> {
        self.send(builder).await.map(|_| ())
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str, query: &Query) -> Result<T, ClientError> {
        self.fetch(self.request(Method::GET, path).query(query)).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.fetch(self.request(Method::POST, path).json(body)).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.fetch(self.request(Method::PUT, path).json(body)).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ClientError> {
        self.execute(self.request(Method::DELETE, path)).await
    }
}

/// Push `(key, value)` when `value` is set.
pub(crate) fn push_opt<T: ToString>(query: &mut Query, key: &'static str, value: Option<T>) {
    if let Some(value) = value {
        query.push((key, value.to_string()));
    }
}
