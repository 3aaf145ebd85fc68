use clap::Subcommand;

/// Resources hub commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ResourceCommands {
    /// List resources.
    List {
        /// Project id, slug or name.
        #[arg(long)]
        project: Option<String>,
        /// documentation, tutorial, video, article, other
        #[arg(long = "type")]
        resource_type: Option<String>,
        /// Match on title.
        #[arg(long)]
        search: Option<String>,
    },
    /// Share a resource.
    Add {
        #[arg(long)]
        project: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        url: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long = "type")]
        resource_type: Option<String>,
    },
    /// Upvote a resource (or downvote with --down).
    Vote {
        id: i64,
        #[arg(long)]
        down: bool,
    },
    /// Delete one of your resources (staff: any).
    Delete { id: i64 },
}
