use std::{
    error::Error,
    fmt::{Display, Formatter},
    sync::Arc,
};

use serde::Deserialize;
use serde_with::SerializeDisplay;
use url::ParseError;

/// The error object the content API nests in its failure envelope.
#[derive(Deserialize, Debug, Clone)]
pub struct ApiServerError {
    pub status: usize,
    pub name: String,
    pub message: String,
}

/// Failure envelope: `{"data": null, "error": {...}}`.
#[derive(Deserialize, Debug, Clone)]
pub struct ApiErrorEnvelope {
    pub error: ApiServerError,
}

#[derive(Debug, SerializeDisplay)]
pub enum RemoteAccessError {
    FetchError(Arc<reqwest::Error>),
    ParsingError(ParseError),
    InvalidResponse(ApiServerError),
    UnparseableResponse(String),
}

impl Display for RemoteAccessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteAccessError::FetchError(error) => {
                if error.is_connect() {
                    return write!(
                        f,
                        "Failed to connect to the content API. Check the base URL, and then try again."
                    );
                }

                write!(
                    f,
                    "{}: {}",
                    error,
                    error
                        .source()
                        .map(std::string::ToString::to_string)
                        .unwrap_or("Unknown error".to_string())
                )
            }
            RemoteAccessError::ParsingError(parse_error) => {
                write!(f, "{parse_error}")
            }
            RemoteAccessError::InvalidResponse(error) => write!(
                f,
                "server returned an invalid response: {} {}: {}",
                error.status, error.name, error.message
            ),
            RemoteAccessError::UnparseableResponse(error) => {
                write!(f, "server returned an invalid response: {error}")
            }
        }
    }
}

impl From<reqwest::Error> for RemoteAccessError {
    fn from(err: reqwest::Error) -> Self {
        RemoteAccessError::FetchError(Arc::new(err))
    }
}
impl From<ParseError> for RemoteAccessError {
    fn from(err: ParseError) -> Self {
        RemoteAccessError::ParsingError(err)
    }
}
impl std::error::Error for RemoteAccessError {}
