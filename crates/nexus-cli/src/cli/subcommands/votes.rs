use clap::Subcommand;

/// Subject vote commands.
#[derive(Clone, Debug, Subcommand)]
pub enum VoteCommands {
    /// List votes.
    List {
        #[arg(long)]
        project: Option<String>,
        /// open, resolved, staff_decided
        #[arg(long)]
        status: Option<String>,
    },
    /// Ask a question with at least two options.
    Create {
        #[arg(long)]
        project: String,
        #[arg(long)]
        question: String,
        #[arg(long)]
        context: Option<String>,
        /// One answer; repeat for each option.
        #[arg(long = "option")]
        options: Vec<String>,
    },
    /// Cast a ballot for one option.
    Cast {
        id: i64,
        /// Option id as shown by `nexus votes list`.
        option: i64,
    },
    /// Staff only: impose a final decision.
    Decide {
        id: i64,
        /// allowed, not_allowed
        decision: String,
    },
}
