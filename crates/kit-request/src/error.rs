//! Error types for the request helper.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
}
