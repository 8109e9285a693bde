use thiserror::Error;

/// Errors from talking to the allocation endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint reported a business failure; the message is shown to the
    /// user verbatim.
    #[error("{0}")]
    Rejected(String),

    /// The request failed at the transport level (connect, send, read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The body parsed as JSON but carried neither `allocation` nor `error`.
    #[error("response carried neither allocation nor error")]
    MalformedReply,
}

impl ApiError {
    /// Returns the server's message if this is a business rejection.
    pub fn rejection_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected(message) => Some(message),
            _ => None,
        }
    }
}
