use serde::Serialize;

/// Result of a user action on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "message")]
pub enum Outcome {
    /// The mutation went through and the list was re-fetched.
    Applied,
    /// The user declined the confirmation prompt; nothing was sent.
    Cancelled,
    /// Client-side validation failed; nothing was sent.
    Invalid(String),
    /// The server or the network refused the action.
    Failed(String),
    /// The server answered 401; the session was cleared.
    SignedOut,
}

impl Outcome {
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_with_outcome_tag() {
        let failed = serde_json::to_value(Outcome::Failed("You have already voted".into()))
            .expect("serialize");
        assert_eq!(
            failed,
            serde_json::json!({"outcome": "failed", "message": "You have already voted"})
        );
        let applied = serde_json::to_value(Outcome::Applied).expect("serialize");
        assert_eq!(applied, serde_json::json!({"outcome": "applied"}));
        assert!(!Outcome::SignedOut.is_applied());
    }
}
