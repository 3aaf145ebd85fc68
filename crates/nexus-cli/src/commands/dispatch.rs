use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Dashboard => commands::dashboard::handle(ctx, flags).await,
        Commands::Projects => commands::projects::handle(ctx, flags).await,
        Commands::Resources { action } => commands::resources::handle(&action, ctx, flags).await,
        Commands::Votes { action } => commands::votes::handle(&action, ctx, flags).await,
        Commands::Disputes { action } => commands::disputes::handle(&action, ctx, flags).await,
        Commands::Tests { action } => commands::tests::handle(&action, ctx, flags).await,
    }
}
