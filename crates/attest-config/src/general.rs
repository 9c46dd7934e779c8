//! General application configuration.

use attest_core::Locale;
use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Display language for rendered notifications, labels and fallback
    /// error messages.
    #[serde(default)]
    pub language: Locale,

    /// Default page size for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: Locale::default(),
            default_limit: default_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.language, Locale::Tr);
        assert_eq!(config.default_limit, 20);
    }
}
