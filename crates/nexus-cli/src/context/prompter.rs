use std::io::{BufRead, IsTerminal, Write};

use nexus_app::Prompter;

/// Alerts go to stderr; confirmations read `y`/`yes` from stdin.
///
/// With `--yes` every confirmation is accepted. Without a terminal on stdin
/// every confirmation is declined.
pub struct TerminalPrompter {
    assume_yes: bool,
}

impl TerminalPrompter {
    #[must_use]
    pub const fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompter for TerminalPrompter {
    fn alert(&self, message: &str) {
        eprintln!("! {message}");
    }

    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        let stdin = std::io::stdin();
        if !stdin.is_terminal() {
            tracing::warn!(message, "no terminal to confirm on; pass --yes to proceed");
            return false;
        }

        eprint!("{message} [y/N] ");
        let _ = std::io::stderr().flush();
        let mut answer = String::new();
        if stdin.lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_yes(&answer)
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
