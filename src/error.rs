/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use reqwest::StatusCode;
use serde_json::Value;
use std::fmt;

/// Errors produced by the feedback client and the command line tool
#[derive(Debug)]
pub enum AppError {
    /// The request never produced a response (connection, DNS, TLS...)
    Network(reqwest::Error),
    /// The service answered with a non-success status
    Status {
        /// HTTP status returned by the service
        status: StatusCode,
        /// Response body, when it was valid JSON
        payload: Option<Value>,
    },
    /// Feedback values supplied by the caller are not valid JSON
    InvalidPayload(String),
    /// Invalid caller supplied input, such as a header value
    InvalidInput(String),
    /// A JSON document could not be decoded
    Json(serde_json::Error),
    /// I/O failure while writing output
    Io(std::io::Error),
}

impl AppError {
    /// Message found under the `error` key of a server error payload
    ///
    /// String values are returned verbatim, any other JSON value is rendered
    /// as JSON text.
    #[must_use]
    pub fn server_error(&self) -> Option<String> {
        match self {
            AppError::Status {
                payload: Some(payload),
                ..
            } => server_error_message(payload),
            _ => None,
        }
    }

    /// HTTP status of the failed response, if there was one
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Status { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}

/// Extracts the `error` entry of a JSON error body
pub(crate) fn server_error_message(payload: &Value) -> Option<String> {
    payload.get("error").map(|value| match value {
        Value::String(message) => message.clone(),
        other => other.to_string(),
    })
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Status { status, .. } => write!(f, "unexpected status: {status}"),
            AppError::InvalidPayload(msg) => write!(f, "invalid payload: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
