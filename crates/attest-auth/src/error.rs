use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated, run `attest auth login`")]
    NotAuthenticated,

    #[error("token expired, run `attest auth login` again")]
    TokenExpired,

    #[error("keyring error: {0}")]
    KeyringError(String),

    #[error("session store error: {0}")]
    TokenStoreError(String),

    #[error("{0}")]
    Other(String),
}
