use clap::Subcommand;

use crate::cli::subcommands::{
    AuthCommands, DisputeCommands, ResourceCommands, TestCommands, VoteCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in, sign out, inspect the session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Welcome, community counts and quick actions.
    Dashboard,
    /// List curriculum projects.
    Projects,
    /// Resources hub.
    Resources {
        #[command(subcommand)]
        action: ResourceCommands,
    },
    /// Subject-clarification votes.
    Votes {
        #[command(subcommand)]
        action: VoteCommands,
    },
    /// Correction disputes.
    Disputes {
        #[command(subcommand)]
        action: DisputeCommands,
    },
    /// Shared test cases.
    Tests {
        #[command(subcommand)]
        action: TestCommands,
    },
}
