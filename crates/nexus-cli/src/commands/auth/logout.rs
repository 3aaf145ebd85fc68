use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
    next: nexus_app::Navigation,
}

pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let next = ctx.session.auth.logout();
    output(&AuthLogoutResponse { cleared: true, next }, flags.format)
}
