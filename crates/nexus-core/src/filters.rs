//! List filters and their query-string parameters.
//!
//! Unset filters are omitted; the server then applies no restriction. The
//! test list is the exception: `approved_only` is always sent because the
//! server defaults it to `true` when absent.

use serde::{Deserialize, Serialize};

use crate::enums::{DisputeStatus, PollStatus, ResourceType, Urgency};
use crate::forms::QueryPairs;

fn push<T: ToString>(pairs: &mut QueryPairs, key: &'static str, value: Option<T>) {
    if let Some(value) = value {
        pairs.push((key, value.to_string()));
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceFilter {
    pub project_id: Option<i64>,
    pub resource_type: Option<ResourceType>,
    pub search: Option<String>,
}

impl ResourceFilter {
    #[must_use]
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = Vec::new();
        push(&mut pairs, "project_id", self.project_id);
        push(&mut pairs, "resource_type", self.resource_type);
        push(
            &mut pairs,
            "search",
            self.search.as_deref().filter(|s| !s.trim().is_empty()),
        );
        pairs
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollFilter {
    pub project_id: Option<i64>,
    pub status: Option<PollStatus>,
}

impl PollFilter {
    #[must_use]
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = Vec::new();
        push(&mut pairs, "project_id", self.project_id);
        push(&mut pairs, "status", self.status);
        pairs
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisputeFilter {
    pub project_id: Option<i64>,
    pub status: Option<DisputeStatus>,
    pub urgency: Option<Urgency>,
}

impl DisputeFilter {
    #[must_use]
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = Vec::new();
        push(&mut pairs, "project_id", self.project_id);
        push(&mut pairs, "status", self.status);
        push(&mut pairs, "urgency", self.urgency);
        pairs
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestFilter {
    pub project_id: Option<i64>,
    /// Sent as `false` too; leaving it out would make the server list
    /// approved tests only.
    pub approved_only: bool,
}

impl TestFilter {
    #[must_use]
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = Vec::new();
        push(&mut pairs, "project_id", self.project_id);
        pairs.push(("approved_only", self.approved_only.to_string()));
        pairs
    }
}
