use nexus_app::Outcome;

pub const SIGN_IN_AGAIN: &str = "session expired or revoked: run `nexus auth login`";

/// Turn a page outcome into the command result.
///
/// `Ok(true)` when the action went through, `Ok(false)` when the user
/// declined the confirmation.
pub fn finish(outcome: Outcome) -> anyhow::Result<bool> {
    match outcome {
        Outcome::Applied => Ok(true),
        Outcome::Cancelled => {
            eprintln!("Cancelled.");
            Ok(false)
        }
        Outcome::Invalid(message) => anyhow::bail!("invalid input: {message}"),
        Outcome::Failed(message) => anyhow::bail!("{message}"),
        Outcome::SignedOut => anyhow::bail!(SIGN_IN_AGAIN),
    }
}
