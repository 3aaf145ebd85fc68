//! Exchange of the OAuth redirect for a session token.
//!
//! The backend finishes the provider handshake and redirects to a callback
//! URL carrying the issued token as `?token=`. Turning that URL into a token
//! is a plain function so it can run from the loopback server, from a URL
//! pasted on the command line, or from a test.

use crate::error::AuthError;

/// Query parameters of a callback URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackParams {
    pub token: Option<String>,
    pub state: Option<String>,
}

/// Parse the query string of a callback URL.
///
/// Accepts a full URL (`http://127.0.0.1:4567/callback?token=...`), a path
/// with a query (`/callback?token=...`) or a bare query (`token=...`).
///
/// # Errors
///
/// Returns [`AuthError::InvalidCallback`] if a parameter is not valid
/// percent-encoding.
pub fn parse(callback_url: &str) -> Result<CallbackParams, AuthError> {
    let trimmed = callback_url.trim();
    let query = match trimmed.split_once('?') {
        Some((_, query)) => query,
        None if trimmed.contains('=') && !trimmed.contains('/') => trimmed,
        None => "",
    };
    let query = query.split('#').next().unwrap_or_default();

    let mut params = CallbackParams::default();
    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let decoded = urlencoding::decode(&value.replace('+', " "))
            .map_err(|e| AuthError::InvalidCallback(format!("URL decode: {e}")))?
            .into_owned();
        match key {
            "token" => params.token = Some(decoded).filter(|t| !t.is_empty()),
            "state" => params.state = Some(decoded),
            _ => {}
        }
    }
    Ok(params)
}

/// Extract the session token from a callback URL.
///
/// When `expected_state` is given and the callback echoes a `state`, the two
/// must match. A callback without `state` is accepted because the backend
/// does not always forward it.
///
/// # Errors
///
/// [`AuthError::MissingToken`] when there is no `token` parameter,
/// [`AuthError::StateMismatch`] when the echoed state differs.
pub fn exchange(callback_url: &str, expected_state: Option<&str>) -> Result<String, AuthError> {
    let params = parse(callback_url)?;
    if let (Some(expected), Some(received)) = (expected_state, params.state.as_deref()) {
        if expected != received {
            return Err(AuthError::StateMismatch);
        }
    }
    params.token.ok_or(AuthError::MissingToken)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("http://localhost:5173/auth/callback?token=abc.def.ghi")]
    #[case("/callback?token=abc.def.ghi&state=s1")]
    #[case("token=abc.def.ghi")]
    #[case("  http://127.0.0.1:4000/callback?token=abc.def.ghi#done  ")]
    fn token_is_found_in_every_shape(#[case] url: &str) {
        assert_eq!(exchange(url, None).expect("token"), "abc.def.ghi");
    }

    #[test]
    fn percent_encoded_token_is_decoded() {
        let params = parse("/callback?token=a%2Eb%2Ec&state=xy%20z").expect("parse");
        assert_eq!(params.token.as_deref(), Some("a.b.c"));
        assert_eq!(params.state.as_deref(), Some("xy z"));
    }

    #[test]
    fn missing_token_is_an_error() {
        let err = exchange("http://localhost:5173/auth/callback", None).expect_err("no token");
        assert!(matches!(err, AuthError::MissingToken));

        let err = exchange("/callback?token=", None).expect_err("empty token");
        assert!(matches!(err, AuthError::MissingToken));
    }

    #[test]
    fn mismatched_state_is_rejected() {
        let err = exchange("/callback?token=t&state=other", Some("mine")).expect_err("csrf");
        assert!(matches!(err, AuthError::StateMismatch));
    }

    #[test]
    fn absent_state_is_accepted() {
        assert_eq!(exchange("/callback?token=t", Some("mine")).expect("token"), "t");
    }
}
