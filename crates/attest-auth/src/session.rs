//! The authenticated-session context object.
//!
//! One [`Session`] is built per process and shared as `Arc<Session>` between
//! the API client and the commands. It holds the bearer token and the current
//! user in memory and mirrors every change to its [`SessionStore`].

use std::sync::{PoisonError, RwLock};

use attest_core::entities::User;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::expiry;
use crate::store::{MemoryStore, SessionStore};

/// Environment variable that supplies a token without a stored session.
pub const TOKEN_ENV_VAR: &str = "ATTEST_AUTH__TOKEN";

/// Persisted session contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub token: String,
    /// `None` until `/auth/me` has been fetched, and for env-supplied tokens.
    #[serde(default)]
    pub user: Option<User>,
}

/// Where the in-memory session came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSource {
    /// Established by a login in this process.
    Login,
    /// Restored from the named store tier.
    Store(&'static str),
    /// Supplied through [`TOKEN_ENV_VAR`].
    Env,
}

impl SessionSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Store(name) => name,
            Self::Env => "env",
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    state: Option<SessionState>,
    source: Option<SessionSource>,
}

pub struct Session {
    inner: RwLock<Inner>,
    store: Box<dyn SessionStore>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .field("store", &self.store.name())
            .finish()
    }
}

impl Session {
    /// Empty session over `store`. Call [`Self::restore`] to rehydrate.
    #[must_use]
    pub fn new(store: Box<dyn SessionStore>) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            store,
        }
    }

    /// Empty session that persists nothing.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    /// Rehydrate from [`TOKEN_ENV_VAR`] or the store.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` when the store cannot be read.
    pub fn restore(&self) -> Result<Option<SessionSource>, AuthError> {
        let env_token = std::env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|token| !token.trim().is_empty());
        self.restore_with_override(env_token)
    }

    /// Rehydrate, preferring `override_token` over the store.
    ///
    /// A restored JWT whose `exp` has passed is discarded with a warning; a
    /// stored one is also removed from the store.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` when the store cannot be read.
    pub fn restore_with_override(
        &self,
        override_token: Option<String>,
    ) -> Result<Option<SessionSource>, AuthError> {
        let now = Utc::now();

        if let Some(token) = override_token {
            if expiry::is_expired(&token, now) {
                tracing::warn!("{TOKEN_ENV_VAR} holds an expired token; ignoring it");
            } else {
                self.replace(Some(SessionState { token, user: None }), Some(SessionSource::Env));
                return Ok(Some(SessionSource::Env));
            }
        }

        let Some(state) = self.store.load()? else {
            self.replace(None, None);
            return Ok(None);
        };

        if expiry::is_expired(&state.token, now) {
            tracing::warn!(
                store = self.store.name(),
                "stored session has expired; run `attest auth login`"
            );
            self.store.clear()?;
            self.replace(None, None);
            return Ok(None);
        }

        let source = SessionSource::Store(self.store.name());
        self.replace(Some(state), Some(source));
        Ok(Some(source))
    }

    /// Hold `token` in memory without persisting it.
    pub fn set_token(&self, token: impl Into<String>) {
        self.replace(
            Some(SessionState {
                token: token.into(),
                user: None,
            }),
            Some(SessionSource::Login),
        );
    }

    /// Record a completed login and persist it.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` when the store rejects the write.
    /// The in-memory session is set either way.
    pub fn establish(&self, token: impl Into<String>, user: User) -> Result<(), AuthError> {
        let state = SessionState {
            token: token.into(),
            user: Some(user),
        };
        self.replace(Some(state.clone()), Some(SessionSource::Login));
        self.store.save(&state)
    }

    /// Forget the session in memory and in the store.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` when the store cannot be cleared.
    /// Memory is cleared first, so the process is logged out regardless.
    pub fn clear(&self) -> Result<(), AuthError> {
        self.replace(None, None);
        self.store.clear()
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.read(|inner| inner.state.as_ref().map(|s| s.token.clone()))
    }

    /// The bearer token, or `NotAuthenticated`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotAuthenticated` when no session is held.
    pub fn require_token(&self) -> Result<String, AuthError> {
        self.token().ok_or(AuthError::NotAuthenticated)
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.read(|inner| inner.state.as_ref().and_then(|s| s.user.clone()))
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read(|inner| inner.state.is_some())
    }

    #[must_use]
    pub fn source(&self) -> Option<SessionSource> {
        self.read(|inner| inner.source)
    }

    #[must_use]
    pub fn store_name(&self) -> &'static str {
        self.store.name()
    }

    fn read<R>(&self, f: impl FnOnce(&Inner) -> R) -> R {
        f(&self.inner.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn replace(&self, state: Option<SessionState>, source: Option<SessionSource>) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.state = state;
        inner.source = source;
    }
}
