use reqwest::StatusCode;
use thiserror::Error;

pub const MISSING_FIELDS_MESSAGE: &str = "From, To locations and Departure Date are required";

/// Failure of a single call to an external service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request failed: {0}")]
    Http(reqwest::Error),

    #[error("status code: {status}, response: {body}")]
    Status { status: StatusCode, body: String },

    #[error("unexpected response: {0}")]
    Malformed(String),
}

// Upstream URLs may carry credentials; never keep them in the error.
impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        UpstreamError::Http(e.without_url())
    }
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("search service: {0}")]
    Search(#[source] UpstreamError),

    #[error("generation service: {0}")]
    Generation(#[source] UpstreamError),
}

impl RelayError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, RelayError::Validation(_))
    }

    /// Message of the underlying cause, without naming which service failed.
    pub fn upstream_message(&self) -> String {
        match self {
            RelayError::Validation(message) => message.to_string(),
            RelayError::Search(e) | RelayError::Generation(e) => e.to_string(),
        }
    }
}
