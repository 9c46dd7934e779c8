//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed env var and file manipulation.

use attest_config::AttestConfig;
use attest_core::Locale;
use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
url = "https://audit.example.com"
prefix = "/api/v2"
timeout_secs = 10
user_agent = "attest-tests"
"#,
        )?;

        let config: AttestConfig = Figment::from(Serialized::defaults(AttestConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.url, "https://audit.example.com");
        assert_eq!(config.api.base_url(), "https://audit.example.com/api/v2");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.api.user_agent, "attest-tests");
        Ok(())
    });
}

#[test]
fn loads_full_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
url = "http://10.0.0.5:8000"

[general]
language = "en"
default_limit = 50

[storage]
data_dir = "/tmp/attest-data"
use_keyring = false
"#,
        )?;

        let config: AttestConfig = Figment::from(Serialized::defaults(AttestConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.prefix, "/api/v1");
        assert_eq!(config.general.language, Locale::En);
        assert_eq!(config.general.default_limit, 50);
        assert_eq!(config.storage.data_dir, "/tmp/attest-data");
        assert!(!config.storage.use_keyring);
        Ok(())
    });
}

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
language = "tr"
default_limit = 10
"#,
        )?;
        jail.set_env("ATTEST_GENERAL__LANGUAGE", "en");

        let config: AttestConfig = Figment::from(Serialized::defaults(AttestConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("ATTEST_").split("__"))
            .extract()?;

        assert_eq!(config.general.language, Locale::En);
        assert_eq!(config.general.default_limit, 10);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".attest")?;
        jail.create_file(
            ".attest/config.toml",
            r#"
[api]
url = "http://staging:8000"
"#,
        )?;

        let config = AttestConfig::load().expect("config loads");
        assert_eq!(config.api.base_url(), "http://staging:8000/api/v1");
        Ok(())
    });
}

#[test]
fn unknown_language_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("ATTEST_GENERAL__LANGUAGE", "de");
        assert!(AttestConfig::load().is_err());
        Ok(())
    });
}

#[test]
fn invalid_url_is_rejected_on_load() {
    Jail::expect_with(|jail| {
        jail.set_env("ATTEST_API__URL", "ftp://files");
        let err = AttestConfig::load().unwrap_err();
        assert!(err.to_string().contains("api.url"));
        Ok(())
    });
}
