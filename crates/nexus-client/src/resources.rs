//! Resource endpoints.

use nexus_core::entities::Resource;
use nexus_core::filters::ResourceFilter;
use nexus_core::forms::{Form, NewResource};

use crate::{Ack, ApiClient, error::ApiError};

impl ApiClient {
    /// `GET /resources` with the filter's query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body cannot be parsed.
    pub async fn list_resources(&self, filter: &ResourceFilter) -> Result<Vec<Resource>, ApiError> {
        self.get_json("/resources", &filter.query_pairs()).await
    }

    /// `POST /resources`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a rejected submission.
    pub async fn create_resource(&self, form: &NewResource) -> Result<Ack, ApiError> {
        self.post_query("/resources", &form.query_pairs()).await
    }

    /// `POST /resources/{id}/vote?is_upvote=`. Whether a repeated vote toggles
    /// or accumulates is up to the server.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a rejected vote.
    pub async fn vote_resource(&self, id: i64, is_upvote: bool) -> Result<Ack, ApiError> {
        self.post_query(
            &format!("/resources/{id}/vote"),
            &[("is_upvote", is_upvote.to_string())],
        )
        .await
    }

    /// `DELETE /resources/{id}`; the server only allows the author or staff.
    ///
    /// # Errors
    ///
    /// [`ApiError::Api`] with status 403 when the caller may not delete it.
    pub async fn delete_resource(&self, id: i64) -> Result<Ack, ApiError> {
        self.delete(&format!("/resources/{id}")).await
    }
}
