use nexus_app::Route;
use nexus_app::pages::disputes::SideView;
use nexus_app::pages::{DisputeCard, DisputesPage};
use nexus_core::enums::DisputeSide;
use nexus_core::forms::NewDispute;

use super::shared::outcome::finish;
use super::shared::parse::{parse_enum, parse_optional, resolve_optional_project, resolve_project};
use super::shared::session::require_user;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::DisputeCommands;
use crate::context::AppContext;
use crate::output::{Listing, TableRow, output_listing};
use crate::progress::with_spinner;

fn side_cell(side: &SideView) -> String {
    let marker = if side.is_winner { " (winner)" } else { "" };
    format!("{} {}% ({} votes){marker}", side.opinion, side.percent, side.votes)
}

impl TableRow for DisputeCard {
    const HEADERS: &'static [&'static str] = &[
        "id", "urgency", "status", "project", "description", "corrector", "corrected", "meta",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.urgency_label.clone(),
            self.staff_banner.clone().unwrap_or_else(|| self.status_label.clone()),
            self.project_name.clone(),
            self.description.clone(),
            side_cell(&self.sides[0]),
            side_cell(&self.sides[1]),
            self.meta.clone(),
        ]
    }
}

/// Handle `nexus disputes`.
pub async fn handle(
    action: &DisputeCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_user(ctx, Route::Disputes).await?;
    let mut page = DisputesPage::default();

    match action {
        DisputeCommands::List {
            project,
            status,
            urgency,
        } => {
            page.filter.project_id = resolve_optional_project(ctx, project.as_deref()).await?;
            page.filter.status = parse_optional(status.as_deref())?;
            page.filter.urgency = parse_optional(urgency.as_deref())?;
            finish(with_spinner("Loading disputes", page.refresh(&mut ctx.session)).await)?;
        }
        DisputeCommands::Create {
            project,
            description,
            corrector,
            corrected,
            urgency,
        } => {
            page.form = NewDispute {
                project_id: Some(resolve_project(ctx, project).await?),
                description: description.clone(),
                corrector_opinion: corrector.clone(),
                corrected_opinion: corrected.clone(),
                urgency: parse_optional(urgency.as_deref())?.unwrap_or_default(),
            };
            finish(page.submit(&mut ctx.session).await)?;
        }
        DisputeCommands::Cast { id, side } => {
            let side: DisputeSide = parse_enum(side)?;
            finish(page.vote(&mut ctx.session, *id, side).await)?;
        }
        DisputeCommands::Decide { id, winner } => {
            let winner: DisputeSide = parse_enum(winner)?;
            if !finish(page.staff_decide(&mut ctx.session, *id, winner).await)? {
                return Ok(());
            }
        }
    }

    let view = page.view(ctx.session.auth.user());
    let mut preamble = vec![view.title.to_string()];
    if let Some(notice) = &view.staff_notice {
        preamble.push(format!("* {}: {}", notice.title, notice.body));
    }
    output_listing(
        &view,
        &Listing {
            preamble,
            rows: &view.cards,
            empty_text: view.empty_text,
        },
        flags.format,
    )
}
