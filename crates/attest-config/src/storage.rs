//! Local storage settings: where the session file and preference slots live.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_use_keyring() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Data directory. Empty means `~/.attest`. A leading `~/` is expanded.
    #[serde(default)]
    pub data_dir: String,

    /// Store the session in the OS keyring, falling back to a file in
    /// `data_dir` when the keyring is unavailable.
    #[serde(default = "default_use_keyring")]
    pub use_keyring: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: String::new(),
            use_keyring: default_use_keyring(),
        }
    }
}

impl StorageConfig {
    /// Resolve the data directory to an absolute-ish path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when the path depends on a home
    /// directory that cannot be determined.
    pub fn resolve_data_dir(&self) -> Result<PathBuf, ConfigError> {
        let raw = self.data_dir.trim();
        if raw.is_empty() {
            return home_dir().map(|home| home.join(".attest"));
        }
        if raw == "~" {
            return home_dir();
        }
        if let Some(rest) = raw.strip_prefix("~/") {
            return home_dir().map(|home| home.join(rest));
        }
        Ok(PathBuf::from(raw))
    }
}

fn home_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir().ok_or_else(|| ConfigError::NotConfigured {
        section: "storage".to_string(),
        reason: "home directory could not be determined; set storage.data_dir".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_is_used_verbatim() {
        let config = StorageConfig {
            data_dir: "/var/lib/attest".into(),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_data_dir().unwrap(),
            PathBuf::from("/var/lib/attest")
        );
    }

    #[test]
    fn default_lands_under_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let resolved = StorageConfig::default().resolve_data_dir().unwrap();
        assert_eq!(resolved, home.join(".attest"));
    }

    #[test]
    fn tilde_is_expanded() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let config = StorageConfig {
            data_dir: "~/audit-data".into(),
            ..Default::default()
        };
        assert_eq!(config.resolve_data_dir().unwrap(), home.join("audit-data"));
    }

    #[test]
    fn keyring_on_by_default() {
        assert!(StorageConfig::default().use_keyring);
    }
}
