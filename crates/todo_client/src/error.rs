use reqwest::StatusCode;
use thiserror::Error;

/// Raised when the remote todo API answers with any status other than 200 OK.
#[derive(Debug, Error)]
#[error("invalid status code in the HTTP response: {status}")]
pub struct RemoteCallFailed {
    pub status: StatusCode,
}
