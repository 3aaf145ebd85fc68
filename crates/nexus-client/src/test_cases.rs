//! Test-case endpoints.

use nexus_core::entities::TestCase;
use nexus_core::filters::TestFilter;
use nexus_core::forms::{Form, NewTestCase};

use crate::http::disposition_filename;
use crate::{Ack, ApiClient, error::ApiError};

/// A downloaded test file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// Name from `Content-Disposition`, if the server sent one.
    pub filename: Option<String>,
    pub bytes: Vec<u8>,
}

impl ApiClient {
    /// `GET /tests`. `approved_only` is always sent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body cannot be parsed.
    pub async fn list_tests(&self, filter: &TestFilter) -> Result<Vec<TestCase>, ApiError> {
        self.get_json("/tests", &filter.query_pairs()).await
    }

    /// `POST /tests`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or a rejected submission.
    pub async fn create_test(&self, form: &NewTestCase) -> Result<Ack, ApiError> {
        self.post_query("/tests", &form.query_pairs()).await
    }

    /// Browser URL of `GET /tests/{id}/download`.
    #[must_use]
    pub fn download_url(&self, id: i64) -> String {
        self.url(&format!("/tests/{id}/download"), &[])
    }

    /// `GET /tests/{id}/download`. The server counts the download.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or an unknown id.
    pub async fn download_test(&self, id: i64) -> Result<Download, ApiError> {
        let resp = self.send_get(&self.download_url(id)).await?;
        let filename = resp
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .and_then(disposition_filename);
        let bytes = resp.bytes().await?.to_vec();
        Ok(Download { filename, bytes })
    }

    /// `POST /tests/{id}/approve` or `/unapprove`. Staff only.
    ///
    /// # Errors
    ///
    /// [`ApiError::Api`] with status 403 for non-staff callers.
    pub async fn set_test_approval(&self, id: i64, approve: bool) -> Result<Ack, ApiError> {
        let action = if approve { "approve" } else { "unapprove" };
        self.post_query(&format!("/tests/{id}/{action}"), &[]).await
    }
}
