use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{PollStatus, StaffDecision};

/// One answer of a poll with its current tally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PollOption {
    pub id: i64,
    #[serde(alias = "option_text")]
    pub text: String,
    #[serde(default)]
    pub vote_count: u64,
}

/// A subject-clarification question with ordered answer options.
///
/// Served under `/votes`; called a poll here to keep it apart from the act of
/// voting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Poll {
    pub id: i64,
    #[serde(default)]
    pub project_id: Option<i64>,
    #[serde(default)]
    pub project_name: String,
    pub question: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub options: Vec<PollOption>,
    #[serde(default)]
    pub status: PollStatus,
    #[serde(default)]
    pub staff_decision: Option<StaffDecision>,
    #[serde(rename = "user_login", default)]
    pub author: String,
    #[serde(default, deserialize_with = "super::timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Poll {
    #[must_use]
    pub fn total_votes(&self) -> u64 {
        self.options.iter().map(|option| option.vote_count).sum()
    }

    #[must_use]
    pub fn option(&self, option_id: i64) -> Option<&PollOption> {
        self.options.iter().find(|option| option.id == option_id)
    }
}
