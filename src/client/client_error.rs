use std::fmt::Display;

use reqwest::StatusCode;

/// Transport-side failures: settings that cannot produce a request, a
/// service that refuses the connection, or plain HTTP trouble.
#[derive(Debug)]
pub enum ClientError {
    MissingSetting(&'static str),
    ConnectionRefused(String),
    BadStatus(StatusCode),
    Http(reqwest::Error),
    Url(url::ParseError),
}

impl Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::MissingSetting(name) => write!(f, "'{name}' is required"),
            ClientError::ConnectionRefused(reason) => write!(f, "connection failed: {reason}"),
            ClientError::BadStatus(status) => write!(f, "bad response: {status}"),
            ClientError::Http(err) => write!(f, "http error: {err}"),
            ClientError::Url(err) => write!(f, "invalid url: {err}"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Http(err) => Some(err),
            ClientError::Url(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Http(err)
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::Url(err)
    }
}
