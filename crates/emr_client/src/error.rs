use thiserror::Error;

/// Canonical message for a 2xx body that violates the adapter contract.
pub const INVALID_FORMAT: &str = "Invalid response format";

#[derive(Debug, Error)]
pub enum ClientError {
    /// Network unreachable, DNS, TLS, request build failure.
    #[error("request failed: {0}")]
    Transport(String),

    /// Non-2xx HTTP status. `message` is the server-supplied message when the
    /// error body carries one, else the operation's static default.
    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// A 2xx body missing the expected shape (e.g. no `results` sequence).
    #[error("{0}")]
    InvalidResponse(String),
}

impl ClientError {
    pub fn invalid_format() -> Self {
        ClientError::InvalidResponse(INVALID_FORMAT.into())
    }

    /// HTTP status of an `Api` error, if that's what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
