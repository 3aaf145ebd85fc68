use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated: run `nexus auth login`")]
    NotAuthenticated,

    #[error("callback carried no token")]
    MissingToken,

    #[error("callback state does not match this login attempt")]
    StateMismatch,

    #[error("invalid callback: {0}")]
    InvalidCallback(String),

    #[error("browser login failed: {0}")]
    BrowserFlowFailed(String),

    #[error("token store error: {0}")]
    TokenStoreError(String),

    #[error("malformed token: {0}")]
    MalformedToken(String),
}
