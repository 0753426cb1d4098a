use contracts::shared::routes::Endpoint;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("failed to send request: {0}")]
    Send(String),
    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Encode(err.to_string())
    }
}

/// Why an action did not apply. The user has already been notified when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Client-side precondition failed; nothing was sent.
    #[error("{0}")]
    Invalid(&'static str),
    #[error("no user id rendered into the page")]
    MissingUser,
    #[error("{endpoint:?} rejected with status {status}")]
    Rejected { endpoint: Endpoint, status: u16 },
    #[error(transparent)]
    Transport(#[from] TransportError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// The user declined the confirmation prompt.
    Declined,
}
