mod app_context;
mod config_warnings;
mod prompter;

pub use app_context::AppContext;
pub use config_warnings::warn_unconfigured;
pub use prompter::TerminalPrompter;
