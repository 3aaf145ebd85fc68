use clap::Subcommand;

/// Correction dispute commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DisputeCommands {
    /// List disputes.
    List {
        #[arg(long)]
        project: Option<String>,
        /// active, resolved, staff_decided
        #[arg(long)]
        status: Option<String>,
        /// low, medium, high
        #[arg(long)]
        urgency: Option<String>,
    },
    /// Report a dispute.
    Create {
        #[arg(long)]
        project: String,
        #[arg(long)]
        description: String,
        /// What the corrector says.
        #[arg(long)]
        corrector: String,
        /// What the corrected student says.
        #[arg(long)]
        corrected: String,
        #[arg(long)]
        urgency: Option<String>,
    },
    /// Side with the corrector or the corrected student.
    Cast {
        id: i64,
        /// corrector, corrected
        side: String,
    },
    /// Staff only: name the winner.
    Decide {
        id: i64,
        /// corrector, corrected
        winner: String,
    },
}
