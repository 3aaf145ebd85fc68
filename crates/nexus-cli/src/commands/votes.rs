use nexus_app::Route;
use nexus_app::pages::{PollCard, VotesPage};
use nexus_core::enums::StaffDecision;
use nexus_core::forms::NewPoll;

use super::shared::outcome::finish;
use super::shared::parse::{parse_enum, parse_optional, resolve_optional_project, resolve_project};
use super::shared::session::require_user;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::VoteCommands;
use crate::context::AppContext;
use crate::output::{Listing, TableRow, output_listing};
use crate::progress::with_spinner;

impl TableRow for PollCard {
    const HEADERS: &'static [&'static str] = &["id", "status", "project", "question", "options", "meta"];

    fn cells(&self) -> Vec<String> {
        let options = self
            .options
            .iter()
            .map(|row| format!("#{} {}: {}", row.id, row.text, row.tally_label()))
            .collect::<Vec<_>>()
            .join("; ");
        vec![
            self.id.to_string(),
            self.staff_banner.clone().unwrap_or_else(|| self.status_label.clone()),
            self.project_name.clone(),
            self.question.clone(),
            options,
            self.meta.clone(),
        ]
    }
}

/// Handle `nexus votes`.
pub async fn handle(
    action: &VoteCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_user(ctx, Route::Votes).await?;
    let mut page = VotesPage::default();

    match action {
        VoteCommands::List { project, status } => {
            page.filter.project_id = resolve_optional_project(ctx, project.as_deref()).await?;
            page.filter.status = parse_optional(status.as_deref())?;
            finish(with_spinner("Loading votes", page.refresh(&mut ctx.session)).await)?;
        }
        VoteCommands::Create {
            project,
            question,
            context,
            options,
        } => {
            let mut form = NewPoll {
                project_id: Some(resolve_project(ctx, project).await?),
                question: question.clone(),
                context: context.clone().unwrap_or_default(),
                ..NewPoll::default()
            };
            if !options.is_empty() {
                form.options.clone_from(options);
            }
            page.form = form;
            finish(page.submit(&mut ctx.session).await)?;
        }
        VoteCommands::Cast { id, option } => {
            finish(page.vote(&mut ctx.session, *id, *option).await)?;
        }
        VoteCommands::Decide { id, decision } => {
            let decision: StaffDecision = parse_enum(decision)?;
            if !finish(page.staff_decide(&mut ctx.session, *id, decision).await)? {
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
