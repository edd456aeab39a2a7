use thiserror::Error;

/// Everything a client call can fail with. Each call surfaces the first
/// error unchanged; nothing is retried or recovered at this layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (unreachable host, timeout,
    /// connection reset, aborted in flight).
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered 404 for the addressed resource.
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// Any other non-2xx answer, with whatever body the backend sent.
    #[error("server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body does not conform to the declared shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid url: {0}")]
    BaseUrl(#[from] url::ParseError),
}
