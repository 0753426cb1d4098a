//! API utilities for frontend-backend communication
//!
//! The API is served from the same origin as the dashboard, so requests
//! carry the session cookie without extra headers.

use async_trait::async_trait;
use contracts::shared::routes::{ApiRequest, HttpMethod};
use gloo_net::http::Request;

use crate::controller::backend::{ApiResponse, Backend};
use crate::controller::error::TransportError;

/// Get the base URL for API requests
///
/// # Returns
/// - Origin of the current page like "https://restrack.example.org"
/// - Empty string if window is not available, which leaves paths relative
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a routed path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/v1/worklists/copy/%7B%7D");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `fetch`-backed transport used in the browser
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpBackend;

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = api_url(&request.url);
        let builder = match request.method {
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Delete => Request::delete(&url),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Send(format!("{:?}: {}", request.endpoint, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Parse(format!("{:?}: {}", request.endpoint, e)))?;

        Ok(ApiResponse { status, body })
    }
}
