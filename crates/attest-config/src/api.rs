//! Backend API connection settings.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_prefix() -> String {
    "/api/v1".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("attest-cli/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Scheme, host and port of the backend.
    #[serde(default = "default_url")]
    pub url: String,

    /// Path prefix every endpoint lives under.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Whole-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            prefix: default_prefix(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// `url` joined with `prefix`, without a trailing slash.
    ///
    /// `http://host:8000/` + `api/v1/` gives `http://host:8000/api/v1`.
    #[must_use]
    pub fn base_url(&self) -> String {
        let url = self.url.trim_end_matches('/');
        let prefix = self.prefix.trim_matches('/');
        if prefix.is_empty() {
            url.to_string()
        } else {
            format!("{url}/{prefix}")
        }
    }

    /// Reject values that cannot produce a usable base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `url` is not http(s) or the
    /// timeout is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.url".to_string(),
                reason: format!("'{}' must start with http:// or https://", self.url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_base_url() {
        assert_eq!(ApiConfig::default().base_url(), "http://localhost:8000/api/v1");
    }

    #[test]
    fn base_url_normalizes_slashes() {
        let config = ApiConfig {
            url: "https://audit.example.com/".into(),
            prefix: "api/v2/".into(),
            ..Default::default()
        };
        assert_eq!(config.base_url(), "https://audit.example.com/api/v2");
    }

    #[test]
    fn empty_prefix_uses_bare_url() {
        let config = ApiConfig {
            prefix: String::new(),
            ..Default::default()
        };
        assert_eq!(config.base_url(), "http://localhost:8000");
    }

    #[test]
    fn validate_rejects_bad_scheme_and_zero_timeout() {
        let bad_url = ApiConfig {
            url: "localhost:8000".into(),
            ..Default::default()
        };
        assert!(bad_url.validate().is_err());

        let zero_timeout = ApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(zero_timeout.validate().is_err());

        assert!(ApiConfig::default().validate().is_ok());
    }

    #[test]
    fn user_agent_carries_version() {
        assert!(ApiConfig::default().user_agent.starts_with("attest-cli/"));
    }
}
