use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use attest_auth::{Session, open_store};
use attest_client::ApiClient;
use attest_config::AttestConfig;
use attest_core::Locale;
use attest_core::entities::User;
use attest_prefs::{CardPreferences, FileStorage};

use crate::cli::GlobalFlags;

/// Directory under the data dir that holds preference slots.
const PREFS_DIR: &str = "prefs";

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: AttestConfig,
    pub session: Arc<Session>,
    pub api: ApiClient,
    pub locale: Locale,
    pub data_dir: PathBuf,
}

impl AppContext {
    /// Resolve the data directory, open the session store, rehydrate the
    /// session and build the API client.
    pub fn init(config: AttestConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        super::warn_mistyped_env();

        let data_dir = config
            .storage
            .resolve_data_dir()
            .context("failed to resolve data directory")?;
        let locale = flags.lang.unwrap_or(config.general.language);

        let session = Arc::new(Session::new(open_store(
            &data_dir,
            config.storage.use_keyring,
        )));
        match session.restore() {
            Ok(Some(source)) => tracing::debug!(source = source.as_str(), "session restored"),
            Ok(None) => tracing::debug!("no stored session"),
            Err(error) => tracing::warn!(%error, "failed to read stored session"),
        }

        let api = ApiClient::new(&config.api, Arc::clone(&session), locale)
            .context("failed to build API client")?;

        Ok(Self {
            config,
            session,
            api,
            locale,
            data_dir,
        })
    }

    /// Fail early when no session is held.
    pub fn require_auth(&self) -> anyhow::Result<()> {
        self.session.require_token()?;
        Ok(())
    }

    /// The logged-in user, fetching `/auth/me` when the session does not
    /// carry one (env-supplied tokens).
    pub async fn current_user(&self) -> anyhow::Result<User> {
        if let Some(user) = self.session.user() {
            return Ok(user);
        }
        self.require_auth()?;
        Ok(self.api.me().await?)
    }

    /// Dashboard card preferences under the data directory.
    pub fn card_preferences(&self) -> anyhow::Result<CardPreferences<FileStorage>> {
        let storage = FileStorage::new(self.data_dir.join(PREFS_DIR));
        CardPreferences::load(storage).context("failed to load dashboard preferences")
    }

    /// Page size for list commands: local arg, then `--limit`, then config.
    pub fn limit(&self, local: Option<u32>, flags: &GlobalFlags) -> u32 {
        crate::commands::shared::limit::effective_limit(
            local,
            flags.limit,
            self.config.general.default_limit,
        )
    }
}
