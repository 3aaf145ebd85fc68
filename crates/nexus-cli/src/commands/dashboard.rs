use nexus_app::layout;
use nexus_app::pages::{DashboardPage, DashboardView};
use nexus_app::{Outcome, Route};

use super::shared::outcome::finish;
use super::shared::session::require_user;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, table};
use crate::progress::with_spinner;
use crate::ui;

/// Handle `nexus dashboard`.
pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_user(ctx, Route::Dashboard).await?;

    let mut page = DashboardPage::default();
    let outcome = with_spinner("Loading stats", page.mount(&mut ctx.session)).await;
    // Counts stay at zero when any list fails; the error is already logged.
    if matches!(outcome, Outcome::SignedOut) {
        finish(outcome)?;
    }

    let view = page.view(ctx.session.auth.user());
    match flags.format {
        OutputFormat::Json | OutputFormat::Raw => output(&view, flags.format),
        OutputFormat::Table => {
            let header = layout::header(ctx.session.auth.user()).unwrap_or_default();
            println!("{}", render(&view, &header));
            Ok(())
        }
    }
}

fn render(view: &DashboardView, header: &str) -> String {
    let nav = layout::nav(Route::Dashboard)
        .iter()
        .map(|item| {
            if item.active {
                format!("[{}]", item.label)
            } else {
                item.label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ");

    let mut lines = vec![format!("{nav}    {header}"), String::new(), view.welcome.clone()];
    lines.push(view.subtitle.to_string());
    if let Some(badge) = &view.staff_badge {
        lines.push(format!("* {}: {}", badge.title, badge.body));
    }
    lines.push(String::new());

    let prefs = ui::prefs();
    let stats = view
        .stats
        .cards()
        .iter()
        .map(|(label, value)| vec![(*label).to_string(), value.to_string()])
        .collect::<Vec<_>>();
    lines.push(table::render_entity_table(
        &["stat", "count"],
        &stats,
        table::TableOptions {
            max_width: prefs.term_width,
            color: false,
        },
    ));
    lines.push(String::new());
    lines.push("Quick actions:".to_string());
    for (route, label) in &view.quick_actions {
        lines.push(format!("  {label:<15} nexus {}", create_command(*route)));
    }
    lines.join("\n")
}

/// CLI equivalent of a quick-action button.
const fn create_command(route: Route) -> &'static str {
    match route {
        Route::Resources => "resources add",
        Route::Votes => "votes create",
        Route::Disputes => "disputes create",
        Route::Tests => "tests add",
        Route::Login | Route::Callback | Route::Dashboard => "dashboard",
    }
}
