use nexus_app::Route;
use nexus_app::pages::{ResourceCard, ResourcesPage};
use nexus_core::forms::NewResource;

use super::shared::outcome::finish;
use super::shared::parse::{parse_optional, resolve_optional_project, resolve_project};
use super::shared::session::require_user;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::ResourceCommands;
use crate::context::AppContext;
use crate::output::{Listing, TableRow, output_listing};
use crate::progress::with_spinner;

impl TableRow for ResourceCard {
    const HEADERS: &'static [&'static str] =
        &["id", "score", "type", "project", "title", "by", "url"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            format!("{:+}", self.score),
            self.resource_type.to_string(),
            self.project_name.clone(),
            self.title.clone(),
            self.author.clone(),
            self.url.clone(),
        ]
    }
}

/// Handle `nexus resources`.
pub async fn handle(
    action: &ResourceCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_user(ctx, Route::Resources).await?;
    let mut page = ResourcesPage::default();

    match action {
        ResourceCommands::List {
            project,
            resource_type,
            search,
        } => {
            page.filter.project_id = resolve_optional_project(ctx, project.as_deref()).await?;
            page.filter.resource_type = parse_optional(resource_type.as_deref())?;
            page.filter.search.clone_from(search);
            finish(with_spinner("Loading resources", page.refresh(&mut ctx.session)).await)?;
        }
        ResourceCommands::Add {
            project,
            title,
            url,
            description,
            resource_type,
        } => {
            page.form = NewResource {
                project_id: Some(resolve_project(ctx, project).await?),
                title: title.clone(),
                url: url.clone(),
                description: description.clone().unwrap_or_default(),
                resource_type: parse_optional(resource_type.as_deref())?.unwrap_or_default(),
            };
            finish(page.submit(&mut ctx.session).await)?;
        }
        ResourceCommands::Vote { id, down } => {
            finish(page.vote(&mut ctx.session, *id, !down).await)?;
        }
        ResourceCommands::Delete { id } => {
            if !finish(page.delete(&mut ctx.session, *id).await)? {
                return Ok(());
            }
        }
    }

    let view = page.view(ctx.session.auth.user());
    output_listing(
        &view,
        &Listing {
            preamble: vec![view.title.to_string()],
            rows: &view.cards,
            empty_text: view.empty_text,
        },
        flags.format,
    )
}
