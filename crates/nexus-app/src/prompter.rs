//! Blocking user prompts: alerts and confirmations.

use std::sync::Mutex;

pub trait Prompter: Send + Sync {
    /// Show a message the user must acknowledge.
    fn alert(&self, message: &str);

    /// Ask a yes/no question. `true` means go ahead.
    fn confirm(&self, message: &str) -> bool;
}

/// Answers every confirmation with a fixed value and keeps a transcript.
///
/// Used for non-interactive runs (`--yes`) and in tests.
#[derive(Debug, Default)]
pub struct RecordingPrompter {
    answer: bool,
    alerts: Mutex<Vec<String>>,
    confirms: Mutex<Vec<String>>,
}

impl RecordingPrompter {
    #[must_use]
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn alerts(&self) -> Vec<String> {
        lock(&self.alerts).clone()
    }

    #[must_use]
    pub fn confirms(&self) -> Vec<String> {
        lock(&self.confirms).clone()
    }
}

fn lock(messages: &Mutex<Vec<String>>) -> std::sync::MutexGuard<'_, Vec<String>> {
    messages
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

impl Prompter for RecordingPrompter {
    fn alert(&self, message: &str) {
        tracing::info!(message, "alert");
        lock(&self.alerts).push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        lock(&self.confirms).push(message.to_string());
        self.answer
    }
}
