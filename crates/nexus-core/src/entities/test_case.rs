use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::TestLanguage;

const PREVIEW_LINES: usize = 10;

/// A shared test case for a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestCase {
    pub id: i64,
    #[serde(default)]
    pub project_id: Option<i64>,
    #[serde(default)]
    pub project_name: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub code_preview: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(rename = "user_login", default)]
    pub author: String,
    #[serde(default, deserialize_with = "super::timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_language() -> String {
    TestLanguage::default().as_str().to_string()
}

impl TestCase {
    /// Server-side preview when present, else the first lines of the code.
    #[must_use]
    pub fn preview(&self) -> String {
        if let Some(preview) = &self.code_preview {
            return preview.clone();
        }
        self.code
            .as_deref()
            .unwrap_or_default()
            .lines()
            .take(PREVIEW_LINES)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Language parsed into the form enum; unknown languages map to `Other`.
    #[must_use]
    pub fn language_kind(&self) -> TestLanguage {
        self.language.parse().unwrap_or(TestLanguage::Other)
    }
}
