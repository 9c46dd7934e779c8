//! Key/value slots that hold serialized preference blobs.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::PrefsError;

/// A string-valued slot store.
pub trait PreferenceStorage {
    /// # Errors
    ///
    /// Returns [`PrefsError`] when an existing slot cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError>;

    /// # Errors
    ///
    /// Returns [`PrefsError`] when the slot cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError>;

    /// Remove a slot. Removing a missing slot succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`PrefsError`] when an existing slot cannot be removed.
    fn remove(&self, key: &str) -> Result<(), PrefsError>;
}

/// One `<key>.json` file per slot under a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub const fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, PrefsError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(PrefsError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl PreferenceStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PrefsError::Io { path, source }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        let path = self.slot_path(key)?;
        fs::create_dir_all(&self.dir).map_err(|source| PrefsError::Io {
            path: self.dir.clone(),
            source,
        })?;
        fs::write(&path, value).map_err(|source| PrefsError::Io { path, source })
    }

    fn remove(&self, key: &str) -> Result<(), PrefsError> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(PrefsError::Io { path, source }),
        }
    }
}

/// In-process slots. Also counts writes so callers can assert no-ops.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
    writes: Mutex<usize>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` and `remove` calls so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn bump(&self) {
        *self.writes.lock().unwrap_or_else(PoisonError::into_inner) += 1;
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self
            .slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.bump();
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PrefsError> {
        self.bump();
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

impl<S: PreferenceStorage + ?Sized> PreferenceStorage for &S {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), PrefsError> {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn file_storage_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let storage = FileStorage::new(tmp.path().join("prefs"));

        assert_eq!(storage.get("slot").unwrap(), None);
        storage.set("slot", "[1,2]").unwrap();
        assert_eq!(storage.get("slot").unwrap().as_deref(), Some("[1,2]"));
        assert!(tmp.path().join("prefs").join("slot.json").exists());

        storage.remove("slot").unwrap();
        assert_eq!(storage.get("slot").unwrap(), None);
        storage.remove("slot").expect("removing twice is fine");
    }

    #[test]
    fn file_storage_rejects_path_like_keys() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let storage = FileStorage::new(tmp.path().to_path_buf());
        assert!(matches!(
            storage.set("../escape", "x"),
            Err(PrefsError::InvalidKey(_))
        ));
        assert!(matches!(storage.get(""), Err(PrefsError::InvalidKey(_))));
    }

    #[test]
    fn memory_storage_counts_writes() {
        let storage = MemoryStorage::new();
        storage.set("a", "1").unwrap();
        storage.remove("a").unwrap();
        assert_eq!(storage.write_count(), 2);
        assert_eq!(storage.get("a").unwrap(), None);
    }
}
