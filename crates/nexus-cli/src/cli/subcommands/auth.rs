use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in through the browser.
    Login(AuthLoginArgs),
    /// Finish a sign-in by pasting the callback URL the browser landed on.
    Callback(AuthCallbackArgs),
    /// Clear the stored token.
    Logout,
    /// Show who is signed in and where the token comes from.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Print the login URL instead of opening a browser.
    #[arg(long)]
    pub no_browser: bool,
    /// Loopback port for the callback server (overrides `auth.callback_port`).
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Clone, Debug, Args)]
pub struct AuthCallbackArgs {
    /// Full callback URL, path, or query string containing `token=...`.
    pub url: String,
    /// State nonce the callback must echo back.
    #[arg(long)]
    pub state: Option<String>,
}
