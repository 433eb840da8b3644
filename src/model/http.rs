//! HTTP helpers shared by the API client and the authenticator.

use crate::error::AppError;
use reqwest::{Client, Method, Response};
use serde::Serialize;
use tracing::debug;

/// Joins the configured base URL with an endpoint path, tolerating redundant
/// slashes on either side.
///
/// # Arguments
/// * `base_url` - Base URL of the org
/// * `path` - Endpoint path
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Encodes request parameters according to the content type: JSON when the
/// content type mentions "json" (case-insensitive), form-urlencoded
/// otherwise.
///
/// # Arguments
/// * `params` - Parameters to encode
/// * `content_type` - Content type the request will be sent with
///
/// # Returns
/// * `Ok(String)` - The encoded payload
/// * `Err(AppError)` - If the parameters cannot be represented in the
///   selected encoding
pub fn encode_params<B: Serialize>(params: &B, content_type: &str) -> Result<String, AppError> {
    if content_type.to_ascii_lowercase().contains("json") {
        Ok(serde_json::to_string(params)?)
    } else {
        serde_urlencoded::to_string(params).map_err(|e| AppError::Encoding(e.to_string()))
    }
}

/// Sends a single HTTP request.
///
/// This is the one place every outbound request goes through. There is no
/// retry and no status handling here: the response is returned as-is and the
/// caller decides what to do with its body.
///
/// # Arguments
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method (GET, POST, PATCH, DELETE, ...)
/// * `url` - Full URL to request, query string included
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `body` - Optional pre-encoded request body
///
/// # Returns
/// * `Ok(Response)` - The HTTP response, whatever its status
/// * `Err(AppError)` - If the request could not be sent
pub async fn make_http_request(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, String)>,
    body: Option<String>,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    for (name, value) in headers {
        request = request.header(name, value);
    }

    if let Some(data) = body {
        request = request.body(data);
    }

    let response = request.send().await?;
    debug!("response status: {}", response.status());

    Ok(response)
}
