// Error type shared by every client call. Only two things can go wrong on
// the wire: the request never completes, or the body is not the JSON we
// expected. API-level failures (`"status": "ERROR"`) are decoded like any
// other response and left to the caller.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by [`ApiClient`](crate::api::ApiClient) and the OAuth helpers.
#[derive(Error, Debug)]
pub enum PutioError {
    /// DNS, connect, TLS or read failure. The request URL is stripped
    /// because its query carries the token.
    #[error("Network error: {0}")]
    Network(reqwest::Error),

    /// The body was not JSON, or did not match the expected shape.
    /// `body` holds the raw response text so API error payloads can be inspected.
    #[error("Failed to decode response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// The download endpoint answered without a redirect to follow.
    #[error("Download was not redirected (HTTP {status})")]
    NotRedirected { status: StatusCode, body: String },

    /// The configured base URL could not be parsed or cannot carry a path.
    #[error("Invalid API url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<reqwest::Error> for PutioError {
    fn from(err: reqwest::Error) -> Self {
        PutioError::Network(err.without_url())
    }
}

impl PutioError {
    /// Raw response text for failures that carry one.
    pub fn body(&self) -> Option<&str> {
        match self {
            PutioError::Decode { body, .. } | PutioError::NotRedirected { body, .. } => Some(body),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PutioError>;
