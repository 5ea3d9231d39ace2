use std::io;

use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RestClientError {
    #[error("REST Request Failed: {0}")]
    RequestFailed(String),

    #[error("REST Response Conversion Failed: {0}")]
    ResponseFailed(String),

    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    Default(String),

    #[error(transparent)]
    UrlError(#[from] url::ParseError),
}

impl From<InvalidHeaderValue> for RestClientError {
    fn from(e: InvalidHeaderValue) -> Self {
        Self::Default(e.to_string())
    }
}

impl From<reqwest::Error> for RestClientError {
    fn from(e: reqwest::Error) -> Self {
        Self::Default(e.to_string())
    }
}

impl From<io::Error> for RestClientError {
    fn from(e: io::Error) -> Self {
        Self::Default(e.to_string())
    }
}

impl From<serde_json::Error> for RestClientError {
    fn from(e: serde_json::Error) -> Self {
        Self::ResponseFailed(e.to_string())
    }
}
