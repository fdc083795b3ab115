use reqwest::StatusCode;
use thiserror::Error;

/// Reasons an upstream fetch cannot be served and the cache is used instead.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request error: `{0}`")]
    Request(#[source] reqwest::Error),
    #[error("unexpected status: `{0}`")]
    Status(StatusCode),
    #[error("body read error: `{0}`")]
    Body(#[source] reqwest::Error),
    #[error("validation error: `{0}`")]
    Validation(#[from] serde_yaml::Error),
}
