use anyhow::Context;
use nexus_app::Session;

use super::SignedIn;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthCallbackArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &AuthCallbackArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let Session { api, auth, .. } = &mut ctx.session;
    auth.complete_callback(api, &args.url, args.state.as_deref())
        .await
        .context("could not complete sign-in from the callback URL")?;

    output(&SignedIn::from_context(ctx)?, flags.format)
}
