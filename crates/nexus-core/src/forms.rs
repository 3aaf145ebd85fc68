//! Creation forms and their client-side checks.
//!
//! Validation is limited to presence: required text fields must not be blank,
//! a project must be selected, and polls need at least two non-empty options.
//! Field contents are sent exactly as typed; blank optional fields are left
//! out of the request so the server stores them as absent.

use serde::{Deserialize, Serialize};

use crate::enums::{ResourceType, TestLanguage, Urgency};
use crate::errors::CoreError;

/// Minimum number of non-empty answers a poll must offer.
pub const MIN_POLL_OPTIONS: usize = 2;

/// Query parameters for a create request, in submission order.
pub type QueryPairs = Vec<(&'static str, String)>;

/// A form that can be checked locally and encoded as request parameters.
pub trait Form {
    /// Presence checks, run before any network call.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingField`] for the first blank required field,
    /// or [`CoreError::TooFewOptions`] for polls.
    fn validate(&self) -> Result<(), CoreError>;

    /// Parameters sent with the create request.
    fn query_pairs(&self) -> QueryPairs;
}

fn require_project(project_id: Option<i64>) -> Result<i64, CoreError> {
    project_id.ok_or(CoreError::MissingField { field: "project" })
}

fn require(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::MissingField { field })
    } else {
        Ok(())
    }
}

fn push_optional(pairs: &mut QueryPairs, key: &'static str, value: &str) {
    if !value.trim().is_empty() {
        pairs.push((key, value.to_string()));
    }
}

fn project_pair(project_id: Option<i64>) -> (&'static str, String) {
    ("project_id", project_id.map(|id| id.to_string()).unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Resource
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewResource {
    pub project_id: Option<i64>,
    pub title: String,
    pub url: String,
    pub description: String,
    pub resource_type: ResourceType,
}

impl Form for NewResource {
    fn validate(&self) -> Result<(), CoreError> {
        require_project(self.project_id)?;
        require("title", &self.title)?;
        require("url", &self.url)
    }

    fn query_pairs(&self) -> QueryPairs {
        let mut pairs = vec![
            project_pair(self.project_id),
            ("title", self.title.clone()),
            ("url", self.url.clone()),
        ];
        push_optional(&mut pairs, "description", &self.description);
        pairs.push(("resource_type", self.resource_type.as_str().to_string()));
        pairs
    }
}

// ---------------------------------------------------------------------------
// Poll
// ---------------------------------------------------------------------------

/// A clarification question. Starts with two empty option slots, like the
/// form it replaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPoll {
    pub project_id: Option<i64>,
    pub question: String,
    pub context: String,
    pub options: Vec<String>,
}

impl Default for NewPoll {
    fn default() -> Self {
        Self {
            project_id: None,
            question: String::new(),
            context: String::new(),
            options: vec![String::new(); MIN_POLL_OPTIONS],
        }
    }
}

impl NewPoll {
    pub fn add_option(&mut self) {
        self.options.push(String::new());
    }

    /// Options that are not blank, in the order entered.
    #[must_use]
    pub fn filled_options(&self) -> Vec<&str> {
        self.options
            .iter()
            .map(String::as_str)
            .filter(|option| !option.trim().is_empty())
            .collect()
    }
}

impl Form for NewPoll {
    fn validate(&self) -> Result<(), CoreError> {
        require_project(self.project_id)?;
        require("question", &self.question)?;
        let provided = self.filled_options().len();
        if provided < MIN_POLL_OPTIONS {
            return Err(CoreError::TooFewOptions { provided });
        }
        Ok(())
    }

    fn query_pairs(&self) -> QueryPairs {
        let mut pairs = vec![
            project_pair(self.project_id),
            ("question", self.question.clone()),
        ];
        push_optional(&mut pairs, "context", &self.context);
        pairs.extend(
            self.filled_options()
                .into_iter()
                .map(|option| ("options", option.to_string())),
        );
        pairs
    }
}

// ---------------------------------------------------------------------------
// Dispute
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDispute {
    pub project_id: Option<i64>,
    pub description: String,
    pub corrector_opinion: String,
    pub corrected_opinion: String,
    pub urgency: Urgency,
}

impl Form for NewDispute {
    fn validate(&self) -> Result<(), CoreError> {
        require_project(self.project_id)?;
        require("description", &self.description)?;
        require("corrector opinion", &self.corrector_opinion)?;
        require("corrected opinion", &self.corrected_opinion)
    }

    fn query_pairs(&self) -> QueryPairs {
        vec![
            project_pair(self.project_id),
            ("description", self.description.clone()),
            ("corrector_opinion", self.corrector_opinion.clone()),
            ("corrected_opinion", self.corrected_opinion.clone()),
            ("urgency", self.urgency.as_str().to_string()),
        ]
    }
}

// ---------------------------------------------------------------------------
// Test case
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTestCase {
    pub project_id: Option<i64>,
    pub title: String,
    pub description: String,
    pub code: String,
    pub language: TestLanguage,
}

impl Form for NewTestCase {
    fn validate(&self) -> Result<(), CoreError> {
        require_project(self.project_id)?;
        require("title", &self.title)?;
        require("code", &self.code)
    }

    fn query_pairs(&self) -> QueryPairs {
        let mut pairs = vec![
            project_pair(self.project_id),
            ("title", self.title.clone()),
        ];
        push_optional(&mut pairs, "description", &self.description);
        pairs.push(("code", self.code.clone()));
        pairs.push(("language", self.language.as_str().to_string()));
        pairs
    }
}
