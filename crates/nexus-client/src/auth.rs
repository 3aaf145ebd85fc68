//! Authentication endpoints.

use nexus_core::entities::User;

use crate::{ApiClient, error::ApiError};

impl ApiClient {
    /// `GET /auth/me`: the user the bearer token belongs to.
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthorized`] when the token is missing or expired.
    pub async fn me(&self) -> Result<User, ApiError> {
        self.get_json("/auth/me", &[]).await
    }

    /// `GET /auth/login`, to be opened in a browser rather than fetched.
    #[must_use]
    pub fn login_url(&self) -> String {
        self.url("/auth/login", &[])
    }
}
