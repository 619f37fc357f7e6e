use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or a body that could not be decoded
    #[error("Backend request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Backend returned {0}")]
    Status(StatusCode),
}

pub type ApiResult<T> = Result<T, ApiError>;
