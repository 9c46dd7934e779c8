//! Client error types.

use attest_auth::AuthError;
use thiserror::Error;

/// Errors returned by [`crate::ApiClient`].
///
/// Messages for `Unreachable`, `NoResponse` and the fallback of `Api` come
/// from the locale catalog; `Api` prefers the server's own `detail`/`message`.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The connection could not be established.
    #[error("{message}")]
    Unreachable {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// The request went out but no response came back (timeout, reset).
    #[error("{message}")]
    NoResponse {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The server answered 401. Outside login the session has already been
    /// cleared.
    #[error("{message}")]
    Unauthorized { message: String },

    /// Login was rejected or did not yield a usable session.
    #[error("login failed: {0}")]
    Login(String),

    /// The response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// The request could not be built (bad URL, client construction).
    #[error("request build error: {0}")]
    Build(String),

    /// No session, or the session store failed.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl ClientError {
    /// HTTP status when the server produced one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Unauthorized { .. } => Some(401),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}
