//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks so endpoint modules only build requests
//! and map bodies. 401 becomes [`ApiError::Unauthorized`]; any other
//! non-success status becomes [`ApiError::Api`] with the FastAPI `detail`
//! pulled out of the body when there is one.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Check an HTTP response for error statuses. Returns it unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let detail = extract_detail(&body);
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized { detail });
    }
    Err(ApiError::Api {
        status: status.as_u16(),
        message: detail.clone().unwrap_or(body),
        detail,
    })
}

/// Read and deserialize a JSON body.
pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Pull `detail` out of a FastAPI error body.
///
/// `detail` is either a string or, for request validation errors, a list of
/// objects with a `msg` field; those messages are joined with `"; "`.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) => Some(detail.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

/// File name from a `Content-Disposition` header value.
pub fn disposition_filename(value: &str) -> Option<String> {
    value.split(';').map(str::trim).find_map(|part| {
        let (key, raw) = part.split_once('=')?;
        if !key.trim().eq_ignore_ascii_case("filename") {
            return None;
        }
        let name = raw.trim().trim_matches('"');
        let name = name.rsplit(['/', '\\']).next().unwrap_or(name);
        (!name.is_empty()).then(|| name.to_string())
    })
}

/// Append percent-encoded query pairs to a URL.
pub fn with_query(mut url: String, pairs: &[(&str, String)]) -> String {
    for (index, (key, value)) in pairs.iter().enumerate() {
        url.push(if index == 0 { '?' } else { '&' });
        url.push_str(&urlencoding::encode(key));
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}
