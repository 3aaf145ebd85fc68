//! Subject-clarification poll endpoints (served under `/votes`).

use nexus_core::entities::Poll;
use nexus_core::enums::StaffDecision;
use nexus_core::filters::PollFilter;
use nexus_core::forms::{Form, NewPoll};

use crate::{Ack, ApiClient, error::ApiError};

impl ApiClient {
    /// `GET /votes`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body cannot be parsed.
    pub async fn list_polls(&self, filter: &PollFilter) -> Result<Vec<Poll>, ApiError> {
        self.get_json("/votes", &filter.query_pairs()).await
    }

    /// `POST /votes` with `options` repeated once per answer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a rejected submission.
    pub async fn create_poll(&self, form: &NewPoll) -> Result<Ack, ApiError> {
        self.post_query("/votes", &form.query_pairs()).await
    }

    /// `POST /votes/{id}/vote?option_id=`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Api`] carrying the server's `detail` when the ballot is
    /// refused (poll closed, already voted).
    pub async fn vote_poll(&self, id: i64, option_id: i64) -> Result<Ack, ApiError> {
        self.post_query(
            &format!("/votes/{id}/vote"),
            &[("option_id", option_id.to_string())],
        )
        .await
    }

    /// `POST /votes/{id}/staff-decide?decision=`. Staff only; terminal.
    ///
    /// # Errors
    ///
    /// [`ApiError::Api`] with status 403 for non-staff callers.
    pub async fn staff_decide_poll(&self, id: i64, decision: StaffDecision) -> Result<Ack, ApiError> {
        self.post_query(
            &format!("/votes/{id}/staff-decide"),
            &[("decision", decision.as_str().to_string())],
        )
        .await
    }
}
