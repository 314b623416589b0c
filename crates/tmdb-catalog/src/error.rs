//! Catalog Errors

use thiserror::Error;

/// Common result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failures of an outbound catalog call.
///
/// A well-formed response with zero records is not an error; it comes back
/// as an empty list (or `None` for trailer lookups).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The request never produced a response (offline, DNS, CORS...)
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    /// `path` never includes the query string, so the API key stays out of logs.
    #[error("unexpected HTTP status {status} for {path}")]
    Status { status: u16, path: String },

    /// The body was not the JSON shape we expect
    #[error("malformed response: {0}")]
    Decode(String),

    #[error("no browser window available")]
    NoWindow,
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err.to_string())
    }
}
