use thiserror::Error;

/// Gamee client errors.
#[derive(Debug, Error)]
pub enum GameeError {
    /// The request never produced an HTTP response (DNS failure, connection
    /// refused, timeout).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The Gamee API returned a non-success status code. The response body
    /// is carried as text and is not parsed as JSON.
    #[error("Gamee API returned {status}: {body}")]
    Http {
        status: reqwest::StatusCode,
        body: String,
    },

    /// A success response could not be decoded, or the gameplay-details
    /// response was missing the game id or release number.
    #[error("failed to decode Gamee API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The base URL or a game URL could not be parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}
