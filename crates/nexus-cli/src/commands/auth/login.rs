use std::time::Duration;

use anyhow::Context;
use nexus_app::Session;
use nexus_auth::browser_flow::{self, LoginOptions};

use super::SignedIn;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let options = login_options(args, &ctx.config);
    tracing::debug!(login_url = %options.login_url, "starting browser login");

    let token = browser_flow::login(&options).await?;

    let Session { api, auth, .. } = &mut ctx.session;
    auth.sign_in(api, &token)
        .await
        .context("the server did not accept the new token")?;

    output(&SignedIn::from_context(ctx)?, flags.format)
}

fn login_options(args: &AuthLoginArgs, config: &nexus_config::NexusConfig) -> LoginOptions {
    LoginOptions {
        login_url: config.login_url(),
        timeout: Duration::from_secs(config.auth.callback_timeout_secs),
        open_browser: config.auth.open_browser && !args.no_browser,
        callback_port: args.port.unwrap_or(config.auth.callback_port),
    }
}

#[cfg(test)]
mod tests {
    use nexus_config::NexusConfig;

    use super::login_options;
    use crate::cli::subcommands::auth::AuthLoginArgs;

    #[test]
    fn flags_override_config() {
        let mut config = NexusConfig::default();
        config.auth.callback_port = 8765;

        let defaults = login_options(&AuthLoginArgs { no_browser: false, port: None }, &config);
        assert!(defaults.open_browser);
        assert_eq!(defaults.callback_port, 8765);
        assert_eq!(defaults.login_url, "http://localhost:8000/api/auth/login");
        assert_eq!(defaults.timeout.as_secs(), 120);

        let overridden =
            login_options(&AuthLoginArgs { no_browser: true, port: Some(9000) }, &config);
        assert!(!overridden.open_browser);
        assert_eq!(overridden.callback_port, 9000);
    }
}
