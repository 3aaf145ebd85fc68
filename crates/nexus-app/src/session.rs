use std::sync::Arc;

use nexus_client::ApiError;

use crate::api::NexusApi;
use crate::outcome::Outcome;
use crate::prompter::Prompter;
use crate::stores::{AuthStore, ProjectsStore};

/// Everything a page needs: API handle, both stores, and the prompter.
pub struct Session<A> {
    pub api: A,
    pub auth: AuthStore,
    pub projects: ProjectsStore,
    pub prompter: Arc<dyn Prompter>,
}

impl<A: NexusApi> Session<A> {
    pub fn new(api: A, auth: AuthStore, prompter: Arc<dyn Prompter>) -> Self {
        Self {
            api,
            auth,
            projects: ProjectsStore::default(),
            prompter,
        }
    }

    #[must_use]
    pub fn is_staff(&self) -> bool {
        self.auth.is_staff()
    }

    /// Handle a failed call: a 401 clears the session, anything else is
    /// logged. List state is left as it was.
    pub(crate) fn fail(&mut self, action: &'static str, error: &ApiError) -> Outcome {
        if error.is_unauthorized() {
            self.auth.handle_unauthorized();
            return Outcome::SignedOut;
        }
        tracing::error!(%error, "Failed to {action}");
        Outcome::Failed(
            error
                .server_message()
                .map_or_else(|| error.to_string(), str::to_string),
        )
    }

    /// Like [`Self::fail`], plus a blocking alert with the server's message.
    pub(crate) fn fail_with_alert(&mut self, action: &'static str, error: &ApiError) -> Outcome {
        let outcome = self.fail(action, error);
        if let Outcome::Failed(_) = outcome {
            let message = error
                .server_message()
                .map_or_else(|| format!("Failed to {action}"), str::to_string);
            self.prompter.alert(&message);
        }
        outcome
    }
}
