use chrono::{DateTime, Utc};
use nexus_app::guard::{self, Access};
use nexus_app::{Route, Session};
use nexus_auth::jwt;

use super::outcome::SIGN_IN_AGAIN;
use crate::context::AppContext;

/// Guard a protected command: require a token, then load its user.
pub async fn require_user(ctx: &mut AppContext, route: Route) -> anyhow::Result<()> {
    if let Access::Redirect(_) = guard::check_route(route, ctx.tokens.as_ref()) {
        anyhow::bail!("not signed in: run `nexus auth login`");
    }

    if let Some(hint) = ctx
        .tokens
        .load()
        .and_then(|token| expiry_hint(&token, Utc::now()))
    {
        tracing::warn!("{hint}");
    }

    let Session { api, auth, .. } = &mut ctx.session;
    if auth.fetch_user(api).await.is_none() {
        anyhow::bail!(SIGN_IN_AGAIN);
    }
    Ok(())
}

/// Warning text for a JWT whose `exp` has passed. Opaque tokens get none.
pub fn expiry_hint(token: &str, now: DateTime<Utc>) -> Option<String> {
    let expires_at = jwt::decode_expiry(token).ok()?;
    (expires_at <= now).then(|| {
        format!(
            "stored token expired at {}; the server will likely refuse it",
            expires_at.to_rfc3339()
        )
    })
}
