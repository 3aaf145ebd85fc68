//! Project endpoints.

use nexus_core::entities::Project;

use crate::{ApiClient, error::ApiError};

impl ApiClient {
    /// `GET /projects`, ordered by curriculum position.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body cannot be parsed.
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get_json("/projects", &[]).await
    }

    /// `GET /projects/{id}`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Api`] with status 404 for an unknown id.
    pub async fn project(&self, id: i64) -> Result<Project, ApiError> {
        self.get_json(&format!("/projects/{id}"), &[]).await
    }

    /// `GET /projects/slug/{slug}`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Api`] with status 404 for an unknown slug.
    pub async fn project_by_slug(&self, slug: &str) -> Result<Project, ApiError> {
        self.get_json(&format!("/projects/slug/{}", urlencoding::encode(slug)), &[])
            .await
    }
}
