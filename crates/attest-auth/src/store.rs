//! Session persistence tiers.
//!
//! [`KeyringStore`] keeps the serialized session in the OS keychain and falls
//! back to a [`FileStore`] when the keychain is unavailable. [`MemoryStore`]
//! keeps nothing across processes and is what tests use.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::AuthError;
use crate::session::SessionState;

const DEFAULT_KEYRING_SERVICE: &str = "attest-cli";
const KEYRING_USER: &str = "session";
const SESSION_FILE_NAME: &str = "session.json";

/// Returns the keyring service name.
///
/// Defaults to `"attest-cli"`. Override via `ATTEST_KEYRING_SERVICE` for
/// testing to avoid touching real credentials.
fn keyring_service() -> String {
    std::env::var("ATTEST_KEYRING_SERVICE").unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

/// Where a [`crate::Session`] persists its state.
pub trait SessionStore: Send + Sync {
    /// Read the persisted session. `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` when stored data exists but cannot
    /// be read.
    fn load(&self) -> Result<Option<SessionState>, AuthError>;

    /// Persist `state`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` when no tier accepts the write.
    fn save(&self, state: &SessionState) -> Result<(), AuthError>;

    /// Remove the persisted session. Succeeds when nothing was stored.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` when stored data cannot be removed.
    fn clear(&self) -> Result<(), AuthError>;

    /// Short tier name for status output.
    fn name(&self) -> &'static str;
}

/// Pick the store for the configured data directory.
#[must_use]
pub fn open_store(data_dir: &Path, use_keyring: bool) -> Box<dyn SessionStore> {
    let file = FileStore::new(data_dir.join(SESSION_FILE_NAME));
    if use_keyring {
        Box::new(KeyringStore::new(file))
    } else {
        Box::new(file)
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<SessionState>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<SessionState>, AuthError> {
        Ok(self
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save(&self, state: &SessionState) -> Result<(), AuthError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(state.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// JSON file with owner-only permissions (0600, parent 0700 on Unix).
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Result<Option<SessionState>, AuthError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AuthError::TokenStoreError(format!(
                    "read {}: {e}",
                    self.path.display()
                )));
            }
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&raw).map(Some).map_err(|e| {
            AuthError::TokenStoreError(format!("parse {}: {e}", self.path.display()))
        })
    }

    fn save(&self, state: &SessionState) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display()))
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }

        let json = serde_json::to_string(state)
            .map_err(|e| AuthError::TokenStoreError(format!("serialize session: {e}")))?;
        fs::write(&self.path, json)
            .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", self.path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AuthError::TokenStoreError(format!("chmod {}: {e}", self.path.display()))
            })?;
        }

        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::TokenStoreError(format!(
                "failed to delete {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

// ---------------------------------------------------------------------------
// KeyringStore
// ---------------------------------------------------------------------------

/// OS keychain entry with a file fallback.
#[derive(Debug, Clone)]
pub struct KeyringStore {
    fallback: FileStore,
}

impl KeyringStore {
    #[must_use]
    pub const fn new(fallback: FileStore) -> Self {
        Self { fallback }
    }

    fn entry() -> Result<keyring::Entry, AuthError> {
        keyring::Entry::new(&keyring_service(), KEYRING_USER)
            .map_err(|e| AuthError::KeyringError(e.to_string()))
    }
}

impl SessionStore for KeyringStore {
    fn load(&self) -> Result<Option<SessionState>, AuthError> {
        if let Ok(entry) = Self::entry() {
            if let Ok(raw) = entry.get_password() {
                if !raw.is_empty() {
                    match serde_json::from_str(&raw) {
                        Ok(state) => return Ok(Some(state)),
                        Err(error) => {
                            tracing::warn!(%error, "keyring session unreadable; trying file");
                        }
                    }
                }
            }
        }
        self.fallback.load()
    }

    fn save(&self, state: &SessionState) -> Result<(), AuthError> {
        let json = serde_json::to_string(state)
            .map_err(|e| AuthError::TokenStoreError(format!("serialize session: {e}")))?;
        match Self::entry() {
            Ok(entry) => match entry.set_password(&json) {
                Ok(()) => Ok(()),
                Err(error) => {
                    tracing::warn!(%error, "keyring store failed; falling back to file");
                    self.fallback.save(state)
                }
            },
            Err(error) => {
                tracing::warn!(%error, "keyring unavailable; falling back to file");
                self.fallback.save(state)
            }
        }
    }

    fn clear(&self) -> Result<(), AuthError> {
        if let Ok(entry) = Self::entry() {
            let _ = entry.delete_credential();
        }
        self.fallback.clear()
    }

    fn name(&self) -> &'static str {
        "keyring"
    }
}
