use std::sync::Arc;

use anyhow::Context;
use nexus_app::{AuthStore, Session};
use nexus_auth::{SystemTokenStore, TokenStore};
use nexus_client::ApiClient;
use nexus_config::NexusConfig;

use super::TerminalPrompter;
use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub session: Session<ApiClient>,
    pub config: NexusConfig,
    pub tokens: Arc<dyn TokenStore>,
}

impl AppContext {
    /// Build the token store, API client and session for one invocation.
    pub fn init(config: NexusConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let tokens: Arc<dyn TokenStore> =
            Arc::new(SystemTokenStore::new().context("failed to open the token store")?);
        let api = ApiClient::new(&config.api, Arc::clone(&tokens))
            .context("failed to build the HTTP client")?;
        let auth = AuthStore::new(Arc::clone(&tokens), config.login_url());
        let prompter = Arc::new(TerminalPrompter::new(flags.yes));

        tracing::debug!(base_url = %api.base_url(), "client ready");

        Ok(Self {
            session: Session::new(api, auth, prompter),
            config,
            tokens,
        })
    }
}
