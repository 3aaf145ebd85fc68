use clap::Parser;
use clap::ValueEnum;
use nexus_config::NexusConfig;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `nexus` binary.
#[derive(Debug, Parser)]
#[command(
    name = "nexus",
    version,
    about = "42Nexus - share resources, settle subject questions and disputes, swap tests"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: table, json, raw (defaults to `general.default_format`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Answer yes to every confirmation prompt
    #[arg(short, long, global = true)]
    pub yes: bool,
}

impl Cli {
    /// Resolve global flags, falling back to the configured output format.
    #[must_use]
    pub fn global_flags(&self, config: &NexusConfig) -> GlobalFlags {
        let format = self.format.unwrap_or_else(|| {
            OutputFormat::from_str(&config.general.default_format, true).unwrap_or_else(|_| {
                tracing::warn!(
                    value = %config.general.default_format,
                    "unknown general.default_format; using table"
                );
                OutputFormat::Table
            })
        });
        GlobalFlags {
            format,
            quiet: self.quiet,
            verbose: self.verbose,
            yes: self.yes,
        }
    }
}
