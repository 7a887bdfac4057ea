use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by judicial API client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Base URL is not a valid absolute URL.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    /// Endpoint path could not be joined to the base URL.
    #[error("invalid endpoint path '{0}'")]
    InvalidPath(String),

    /// HTTP transport-layer failure (DNS, connect, timeout, body read).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status with response payload.
    #[error("server returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Response body is not JSON of the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Credentials were rejected or the auth response carried no token.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The change-list endpoint rejected the token.
    #[error("token rejected by the change-list endpoint; re-authenticate")]
    AuthExpired,

    /// The document endpoint reported an error for the requested identifier.
    #[error("document fetch failed: {0}")]
    Fetch(String),
}

impl ClientError {
    /// HTTP status carried by [`ClientError::Status`] or a transport error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(error) => error.status(),
            _ => None,
        }
    }

    /// Whether the caller should obtain a fresh token before retrying.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Auth(_) | Self::AuthExpired)
    }
}
