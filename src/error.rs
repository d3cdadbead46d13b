use crate::parse;
use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub enum Error {
    /// The request could not be completed, or the server answered with an error status.
    Connection(reqwest::Error),
    /// The request was redirected away from the resource, which is how the
    /// site reports that a course or event does not exist.
    NotFound(String),
    /// The meal plan login rejected the credentials.
    Authentication,
    Parse(parse::Error),
    Json(serde_json::Error),
    Io(std::io::Error),
    Url(url::ParseError),
    InvalidInput(String),
}

impl From<parse::Error> for Error {
    fn from(e: parse::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Connection(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Self::Url(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connection(e) => write!(f, "Connection error: {e}"),
            Self::NotFound(url) => write!(f, "Not found: nothing exists at {url}"),
            Self::Authentication => {
                write!(f, "Authentication error: invalid credentials supplied")
            }
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Json(e) => write!(f, "Json error: {e}"),
            Self::Io(e) => write!(f, "Io error: {e}"),
            Self::Url(e) => write!(f, "Url error: {e}"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Connection(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Url(e) => Some(e),
            Self::NotFound(_) | Self::Authentication | Self::InvalidInput(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
