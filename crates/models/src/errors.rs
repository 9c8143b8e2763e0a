use thiserror::Error;

/// Validation failures for page request construction.
///
/// Only explicitly negative input is rejected; zero and oversized values
/// are normalized instead (see `PageRequest::build`).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("invalid limit: {0} (must not be negative)")]
    InvalidLimit(i64),
    #[error("invalid page: {0} (must not be negative)")]
    InvalidPage(i64),
}
