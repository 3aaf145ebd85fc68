use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::ResourceType;

/// A shared external learning link with up/down votes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resource {
    pub id: i64,
    #[serde(default)]
    pub project_id: Option<i64>,
    #[serde(default)]
    pub project_name: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub resource_type: ResourceType,
    #[serde(default)]
    pub upvotes: u64,
    #[serde(default)]
    pub downvotes: u64,
    #[serde(rename = "user_login", default)]
    pub author: String,
    #[serde(default, deserialize_with = "super::timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Sign of a resource score, used to color the score cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreSign {
    Positive,
    Negative,
    Zero,
}

impl Resource {
    /// Net score: upvotes minus downvotes.
    #[must_use]
    pub fn score(&self) -> i64 {
        i64::try_from(self.upvotes).unwrap_or(i64::MAX)
            - i64::try_from(self.downvotes).unwrap_or(i64::MAX)
    }

    #[must_use]
    pub fn score_sign(&self) -> ScoreSign {
        match self.score() {
            s if s > 0 => ScoreSign::Positive,
            s if s < 0 => ScoreSign::Negative,
            _ => ScoreSign::Zero,
        }
    }
}
