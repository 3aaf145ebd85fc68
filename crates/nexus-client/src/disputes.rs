//! Correction dispute endpoints.

use nexus_core::entities::Dispute;
use nexus_core::enums::DisputeSide;
use nexus_core::filters::DisputeFilter;
use nexus_core::forms::{Form, NewDispute};

use crate::{Ack, ApiClient, error::ApiError};

impl ApiClient {
    /// `GET /disputes`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body cannot be parsed.
    pub async fn list_disputes(&self, filter: &DisputeFilter) -> Result<Vec<Dispute>, ApiError> {
        self.get_json("/disputes", &filter.query_pairs()).await
    }

    /// `POST /disputes`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a rejected submission.
    pub async fn create_dispute(&self, form: &NewDispute) -> Result<Ack, ApiError> {
        self.post_query("/disputes", &form.query_pairs()).await
    }

    /// `POST /disputes/{id}/vote?vote_for=`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Api`] carrying the server's `detail` when the ballot is
    /// refused.
    pub async fn vote_dispute(&self, id: i64, side: DisputeSide) -> Result<Ack, ApiError> {
        self.post_query(
            &format!("/disputes/{id}/vote"),
            &[("vote_for", side.as_str().to_string())],
        )
        .await
    }

    /// `POST /disputes/{id}/staff-decide?winner=`. Staff only; terminal.
    ///
    /// # Errors
    ///
    /// [`ApiError::Api`] with status 403 for non-staff callers.
    pub async fn staff_decide_dispute(&self, id: i64, winner: DisputeSide) -> Result<Ack, ApiError> {
        self.post_query(
            &format!("/disputes/{id}/staff-decide"),
            &[("winner", winner.as_str().to_string())],
        )
        .await
    }
}
