mod callback;
mod login;
mod logout;
mod status;

use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;

/// Handle `nexus auth <subcommand>`.
pub async fn handle(
    action: &AuthCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, ctx, flags).await,
        AuthCommands::Callback(args) => callback::handle(args, ctx, flags).await,
        AuthCommands::Logout => logout::handle(ctx, flags),
        AuthCommands::Status => status::handle(ctx, flags).await,
    }
}

/// Printed after a successful sign-in.
#[derive(Serialize)]
struct SignedIn {
    authenticated: bool,
    login: String,
    role: String,
    token_source: Option<String>,
    next: &'static str,
}

impl SignedIn {
    fn from_context(ctx: &AppContext) -> anyhow::Result<Self> {
        let user = ctx
            .session
            .auth
            .user()
            .ok_or_else(|| anyhow::anyhow!("signed in but no user loaded"))?;
        Ok(Self {
            authenticated: true,
            login: user.login.clone(),
            role: user.role.to_string(),
            token_source: ctx.session.auth.token_source().map(|source| source.to_string()),
            next: nexus_app::Route::Dashboard.path(),
        })
    }
}
