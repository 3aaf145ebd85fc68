//! Status and category enums for 42Nexus entities.
//!
//! All enums use `snake_case` serialization, matching the values the API
//! sends and accepts in query strings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

macro_rules! wire_enum {
    ($ty:ident, $field:literal, { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $ty {
            /// All variants in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Return the wire spelling used in JSON bodies and query strings.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = CoreError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.as_str() == normalized)
                    .ok_or_else(|| CoreError::InvalidValue {
                        field: $field,
                        value: raw.to_string(),
                    })
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Role of an authenticated user. Staff users may override peer decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Student,
    Staff,
}

wire_enum!(Role, "role", { Student => "student", Staff => "staff" });

impl Role {
    #[must_use]
    pub const fn is_staff(self) -> bool {
        matches!(self, Self::Staff)
    }
}

// ---------------------------------------------------------------------------
// ResourceType
// ---------------------------------------------------------------------------

/// Category of a shared learning resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Documentation,
    Tutorial,
    Video,
    Article,
    #[default]
    Other,
}

wire_enum!(ResourceType, "resource type", {
    Documentation => "documentation",
    Tutorial => "tutorial",
    Video => "video",
    Article => "article",
    Other => "other",
});

// ---------------------------------------------------------------------------
// PollStatus
// ---------------------------------------------------------------------------

/// Status of a subject-clarification poll.
///
/// ```text
/// open → resolved
///      → staff_decided (terminal, staff only)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PollStatus {
    #[default]
    Open,
    Resolved,
    StaffDecided,
}

wire_enum!(PollStatus, "status", {
    Open => "open",
    Resolved => "resolved",
    StaffDecided => "staff_decided",
});

impl PollStatus {
    /// Peer ballots are only accepted while the poll is open.
    #[must_use]
    pub const fn accepts_ballots(self) -> bool {
        matches!(self, Self::Open)
    }

    #[must_use]
    pub const fn is_staff_decided(self) -> bool {
        matches!(self, Self::StaffDecided)
    }

    /// Badge text, e.g. `STAFF DECIDED`.
    #[must_use]
    pub fn label(self) -> String {
        self.as_str().replace('_', " ").to_ascii_uppercase()
    }
}

// ---------------------------------------------------------------------------
// StaffDecision
// ---------------------------------------------------------------------------

/// Final ruling a staff member can impose on a poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffDecision {
    Allowed,
    NotAllowed,
}

wire_enum!(StaffDecision, "decision", {
    Allowed => "allowed",
    NotAllowed => "not_allowed",
});

impl StaffDecision {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Allowed => "ALLOWED",
            Self::NotAllowed => "NOT ALLOWED",
        }
    }
}

// ---------------------------------------------------------------------------
// DisputeStatus
// ---------------------------------------------------------------------------

/// Status of a correction dispute.
///
/// ```text
/// active → resolved
///        → staff_decided (terminal, staff only)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisputeStatus {
    #[default]
    Active,
    Resolved,
    StaffDecided,
}

wire_enum!(DisputeStatus, "status", {
    Active => "active",
    Resolved => "resolved",
    StaffDecided => "staff_decided",
});

impl DisputeStatus {
    #[must_use]
    pub const fn accepts_ballots(self) -> bool {
        matches!(self, Self::Active)
    }

    #[must_use]
    pub const fn is_staff_decided(self) -> bool {
        matches!(self, Self::StaffDecided)
    }

    #[must_use]
    pub fn label(self) -> String {
        self.as_str().replace('_', " ").to_ascii_uppercase()
    }
}

// ---------------------------------------------------------------------------
// Urgency
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
}

wire_enum!(Urgency, "urgency", { Low => "low", Medium => "medium", High => "high" });

impl Urgency {
    #[must_use]
    pub fn label(self) -> String {
        format!("{} URGENCY", self.as_str().to_ascii_uppercase())
    }
}

// ---------------------------------------------------------------------------
// DisputeSide
// ---------------------------------------------------------------------------

/// One of the two parties of a correction dispute.
///
/// Used both for peer ballots (`vote_for`) and for the staff-imposed winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisputeSide {
    Corrector,
    Corrected,
}

wire_enum!(DisputeSide, "side", { Corrector => "corrector", Corrected => "corrected" });

impl DisputeSide {
    #[must_use]
    pub fn label(self) -> String {
        self.as_str().to_ascii_uppercase()
    }
}

// ---------------------------------------------------------------------------
// TestLanguage
// ---------------------------------------------------------------------------

/// Languages offered by the test-case submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TestLanguage {
    #[default]
    Python,
    Bash,
    Javascript,
    Other,
}

wire_enum!(TestLanguage, "language", {
    Python => "python",
    Bash => "bash",
    Javascript => "javascript",
    Other => "other",
});

impl TestLanguage {
    /// File extension used when a downloaded test has no server-provided name.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Python => "py",
            Self::Bash => "sh",
            Self::Javascript => "js",
            Self::Other => "txt",
        }
    }
}
