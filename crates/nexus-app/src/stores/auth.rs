//! Current user and token.

use std::sync::Arc;

use nexus_auth::{AuthError, TokenSource, TokenStore, callback};
use nexus_core::entities::User;

use crate::api::NexusApi;
use crate::layout::{Navigation, Route};

/// Holds the signed-in user; the token itself lives in the [`TokenStore`].
pub struct AuthStore {
    tokens: Arc<dyn TokenStore>,
    login_url: String,
    user: Option<User>,
    loading: bool,
}

impl AuthStore {
    pub fn new(tokens: Arc<dyn TokenStore>, login_url: impl Into<String>) -> Self {
        Self {
            tokens,
            login_url: login_url.into(),
            user: None,
            loading: true,
        }
    }

    /// Send the user to the provider's login endpoint.
    #[must_use]
    pub fn login(&self) -> Navigation {
        Navigation::External(self.login_url.clone())
    }

    #[must_use]
    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    /// Persist a session token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenStoreError`] if the store rejects the write.
    pub fn set_token(&self, token: &str) -> Result<(), AuthError> {
        self.tokens.store(token)
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.tokens.load()
    }

    #[must_use]
    pub fn token_source(&self) -> Option<TokenSource> {
        self.tokens.source()
    }

    /// Load the user for the persisted token.
    ///
    /// No token: the user becomes `None` without a request. Any failure of
    /// `GET /auth/me` clears both token and user; there is no retry.
    pub async fn fetch_user<A: NexusApi>(&mut self, api: &A) -> Option<&User> {
        if self.tokens.load().is_none() {
            self.user = None;
            self.loading = false;
            return None;
        }

        match api.me().await {
            Ok(user) => {
                tracing::debug!(login = %user.login, "session user loaded");
                self.user = Some(user);
            }
            Err(error) => {
                tracing::warn!(%error, "failed to load current user; clearing session");
                self.clear_token();
                self.user = None;
            }
        }
        self.loading = false;
        self.user.as_ref()
    }

    /// Turn an OAuth callback URL into a signed-in session.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingToken`] or [`AuthError::StateMismatch`] from the
    /// exchange, a store error, or [`AuthError::NotAuthenticated`] when the
    /// server rejects the new token.
    pub async fn complete_callback<A: NexusApi>(
        &mut self,
        api: &A,
        callback_url: &str,
        expected_state: Option<&str>,
    ) -> Result<&User, AuthError> {
        let token = callback::exchange(callback_url, expected_state)?;
        self.sign_in(api, &token).await
    }

    /// Persist `token` and load its user.
    ///
    /// # Errors
    ///
    /// A store error, or [`AuthError::NotAuthenticated`] when `/auth/me`
    /// rejects the token (which is then cleared again).
    pub async fn sign_in<A: NexusApi>(&mut self, api: &A, token: &str) -> Result<&User, AuthError> {
        self.set_token(token)?;
        self.fetch_user(api).await.ok_or(AuthError::NotAuthenticated)
    }

    /// Clear token and user, then go to the login view.
    pub fn logout(&mut self) -> Navigation {
        self.clear_token();
        self.user = None;
        Navigation::Route(Route::Login)
    }

    /// Same as [`Self::logout`]; called when the server answers 401.
    pub fn handle_unauthorized(&mut self) -> Navigation {
        tracing::warn!("session expired or revoked; signing out");
        self.logout()
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_staff(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_staff)
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    fn clear_token(&self) {
        if let Err(error) = self.tokens.delete() {
            tracing::error!(%error, "failed to clear stored token");
        }
    }
}
