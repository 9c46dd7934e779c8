use attest_config::AttestConfig;
use figment::Jail;

#[test]
fn env_sets_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("ATTEST_API__URL", "https://api.example.org");
        jail.set_env("ATTEST_API__TIMEOUT_SECS", "5");
        jail.set_env("ATTEST_STORAGE__USE_KEYRING", "false");
        jail.set_env("ATTEST_GENERAL__DEFAULT_LIMIT", "100");

        let config = AttestConfig::load().expect("config loads");
        assert_eq!(config.api.base_url(), "https://api.example.org/api/v1");
        assert_eq!(config.api.timeout_secs, 5);
        assert!(!config.storage.use_keyring);
        assert_eq!(config.general.default_limit, 100);
        Ok(())
    });
}

#[test]
fn storage_dir_from_env_resolves() {
    Jail::expect_with(|jail| {
        let dir = jail.directory().join("data");
        jail.set_env("ATTEST_STORAGE__DATA_DIR", dir.display().to_string());

        let config = AttestConfig::load().expect("config loads");
        assert_eq!(config.storage.resolve_data_dir().expect("resolves"), dir);
        Ok(())
    });
}
