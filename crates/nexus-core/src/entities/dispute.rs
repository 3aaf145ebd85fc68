use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{DisputeSide, DisputeStatus, Urgency};

/// A two-sided disagreement between a corrector and the corrected student.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dispute {
    pub id: i64,
    #[serde(default)]
    pub project_id: Option<i64>,
    #[serde(default)]
    pub project_name: String,
    pub description: String,
    pub corrector_opinion: String,
    pub corrected_opinion: String,
    #[serde(default)]
    pub corrector_votes: u64,
    #[serde(default)]
    pub corrected_votes: u64,
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(default)]
    pub status: DisputeStatus,
    #[serde(default)]
    pub winner: Option<DisputeSide>,
    #[serde(rename = "creator_login", default)]
    pub author: String,
    #[serde(default, deserialize_with = "super::timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Dispute {
    #[must_use]
    pub const fn total_votes(&self) -> u64 {
        self.corrector_votes + self.corrected_votes
    }

    #[must_use]
    pub fn opinion(&self, side: DisputeSide) -> &str {
        match side {
            DisputeSide::Corrector => &self.corrector_opinion,
            DisputeSide::Corrected => &self.corrected_opinion,
        }
    }

    #[must_use]
    pub const fn votes(&self, side: DisputeSide) -> u64 {
        match side {
            DisputeSide::Corrector => self.corrector_votes,
            DisputeSide::Corrected => self.corrected_votes,
        }
    }
}
