use nexus_app::Route;
use nexus_core::entities::Project;

use super::shared::session::require_user;
use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{Listing, TableRow, output_listing};
use crate::progress::with_spinner;

impl TableRow for Project {
    const HEADERS: &'static [&'static str] = &["id", "name", "slug", "order"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.slug.clone(),
            self.order_index.to_string(),
        ]
    }
}

/// Handle `nexus projects`.
pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_user(ctx, Route::Dashboard).await?;

    let session = &mut ctx.session;
    let projects = with_spinner("Loading projects", session.projects.fetch_projects(&session.api))
        .await;

    output_listing(
        &projects,
        &Listing {
            preamble: Vec::new(),
            rows: projects,
            empty_text: Some("No projects found"),
        },
        flags.format,
    )
}
