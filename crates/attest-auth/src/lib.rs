//! # attest-auth
//!
//! Session handling for Attest.
//!
//! - [`Session`]: explicit context object holding the bearer token and the
//!   current user, shared as `Arc<Session>`
//! - [`SessionStore`]: persistence interface with keyring, file and memory
//!   tiers
//! - [`expiry`]: unverified JWT `exp` peek used to drop dead sessions on
//!   restore
//!
//! Token priority on restore: `ATTEST_AUTH__TOKEN` env, then the configured
//! store. The backend remains the only authority on token validity.

pub mod error;
pub mod expiry;
pub mod session;
pub mod store;

pub use error::AuthError;
pub use session::{Session, SessionSource, SessionState, TOKEN_ENV_VAR};
pub use store::{FileStore, KeyringStore, MemoryStore, SessionStore, open_store};
