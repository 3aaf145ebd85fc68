use base64::Engine as _;
use chrono::{DateTime, Utc};

use crate::error::AuthError;

/// Decode the JWT `exp` claim without verifying the signature.
///
/// Used only to warn about a stale session before calling the API; the
/// server remains the authority on validity.
///
/// # Errors
///
/// Returns [`AuthError::MalformedToken`] if the token is not a three-part
/// JWT or the `exp` claim is missing or out of range.
pub fn decode_expiry(jwt: &str) -> Result<DateTime<Utc>, AuthError> {
    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::MalformedToken("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .map_err(|e| AuthError::MalformedToken(format!("base64 decode failed: {e}")))?;
    let value: serde_json::Value = serde_json::from_slice(&payload)
        .map_err(|e| AuthError::MalformedToken(format!("JSON parse failed: {e}")))?;
    let exp = value["exp"]
        .as_i64()
        .ok_or_else(|| AuthError::MalformedToken("missing exp claim".into()))?;
    DateTime::from_timestamp(exp, 0)
        .ok_or_else(|| AuthError::MalformedToken("invalid exp timestamp".into()))
}

/// Whether the token's `exp` lies before `now`. Opaque tokens count as live.
#[must_use]
pub fn is_expired(jwt: &str, now: DateTime<Utc>) -> bool {
    decode_expiry(jwt).is_ok_and(|exp| exp <= now)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_jwt(payload: &str) -> String {
        let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
        format!(
            "{}.{}.{}",
            engine.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            engine.encode(payload),
            engine.encode("sig")
        )
    }

    #[test]
    fn decodes_exp_claim() {
        let exp = Utc::now().timestamp() + 3600;
        let jwt = make_jwt(&format!(r#"{{"sub":"42","exp":{exp}}}"#));
        assert_eq!(decode_expiry(&jwt).expect("exp").timestamp(), exp);
        assert!(!is_expired(&jwt, Utc::now()));
    }

    #[test]
    fn past_exp_is_expired() {
        let exp = Utc::now().timestamp() - 60;
        let jwt = make_jwt(&format!(r#"{{"sub":"42","exp":{exp}}}"#));
        assert!(is_expired(&jwt, Utc::now()));
    }

    #[test]
    fn opaque_token_is_not_reported_expired() {
        assert!(decode_expiry("opaque-token").is_err());
        assert!(!is_expired("opaque-token", Utc::now()));
    }

    #[test]
    fn missing_exp_is_reported() {
        let jwt = make_jwt(r#"{"sub":"42"}"#);
        let err = decode_expiry(&jwt).expect_err("no exp");
        assert!(err.to_string().contains("missing exp claim"));
    }

    #[test]
    fn bad_base64_is_reported() {
        let err = decode_expiry("header.!!!.sig").expect_err("bad payload");
        assert!(err.to_string().contains("base64 decode failed"));
    }
}
