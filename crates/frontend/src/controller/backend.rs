use async_trait::async_trait;
use contracts::shared::routes::ApiRequest;
use serde_json::Value;

use super::error::TransportError;

/// Raw outcome of an API call: HTTP status plus the unparsed body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json(&self) -> Result<Value, TransportError> {
        serde_json::from_str(&self.body).map_err(|e| TransportError::Parse(e.to_string()))
    }
}

/// Transport for the mutating API calls.
///
/// wasm is single-threaded, so futures are not required to be `Send`.
#[async_trait(?Send)]
pub trait Backend {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError>;
}
