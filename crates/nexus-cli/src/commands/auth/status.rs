use chrono::Utc;
use nexus_app::Session;
use nexus_app::layout;
use nexus_auth::jwt;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user: Option<String>,
    display_name: Option<String>,
    email: Option<String>,
    token_source: Option<String>,
    expires_at: Option<String>,
    api: String,
    note: Option<String>,
}

pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let api_url = ctx.session.api.base_url().to_string();
    let token = ctx.session.auth.token();
    let token_source = ctx.session.auth.token_source().map(|source| source.to_string());

    let Some(token) = token else {
        return output(
            &AuthStatusResponse {
                authenticated: false,
                user: None,
                display_name: None,
                email: None,
                token_source: None,
                expires_at: None,
                api: api_url,
                note: Some("no token stored; run `nexus auth login`".into()),
            },
            flags.format,
        );
    };

    let expires_at = jwt::decode_expiry(&token).ok();
    let expired = expires_at.is_some_and(|at| at <= Utc::now());

    let Session { api, auth, .. } = &mut ctx.session;
    let status = match auth.fetch_user(api).await {
        Some(user) => AuthStatusResponse {
            authenticated: true,
            user: layout::header(Some(user)),
            display_name: user.display_name.clone(),
            email: user.email.clone(),
            token_source,
            expires_at: expires_at.map(|at| at.to_rfc3339()),
            api: api_url,
            note: None,
        },
        None => AuthStatusResponse {
            authenticated: false,
            user: None,
            display_name: None,
            email: None,
            token_source,
            expires_at: expires_at.map(|at| at.to_rfc3339()),
            api: api_url,
            note: Some(if expired {
                "token expired and was cleared; run `nexus auth login`".into()
            } else {
                "server rejected the token; it was cleared".into()
            }),
        },
    };

    output(&status, flags.format)
}
