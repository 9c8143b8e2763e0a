use thiserror::Error;

use models::errors::PageError;

/// Business errors for paginated listings.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request error: {0}")]
    Request(#[from] PageError),
    #[error("source error: {0}")]
    Source(String),
}

impl ServiceError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Request(_) => 1001,
            ServiceError::Source(_) => 1200,
        }
    }
}
