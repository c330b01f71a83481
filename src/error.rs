/// All errors that can occur while talking to the tennis API or normalizing
/// its responses.
#[derive(thiserror::Error, Debug)]
pub enum TennisError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read or decode the JSON response body.
    #[error("failed to decode response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// Parallel columns of a match bundle disagree on length.
    ///
    /// The bundle is rejected whole; nothing is truncated or zipped short.
    #[error("malformed match bundle: column lengths disagree: {lengths:?}")]
    MalformedBundle { lengths: Vec<(&'static str, usize)> },

    /// Failed to parse a date/time from a match record's display strings.
    #[error("failed to parse date: {0}")]
    DateParse(#[from] chrono::ParseError),
}

pub type Result<T> = std::result::Result<T, TennisError>;
