//! Error handling for the API module.

use thiserror::Error;

use crate::logging::LogLevel;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The response body carried an `error` field; shown to the user verbatim.
    #[error("{0}")]
    Api(String),

    /// Non-success HTTP status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The body was not the JSON shape we expected.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Activity-log level for this error. Transport hiccups log as warnings,
    /// everything else as errors.
    pub fn log_level(&self) -> LogLevel {
        match self {
            ApiError::Reqwest(_) => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Api errors display the server's message with no added prefix.
    fn api_error_displays_verbatim() {
        let err = ApiError::Api("bad range".to_string());
        assert_eq!(err.to_string(), "bad range");
    }

    #[test]
    fn http_error_includes_status() {
        let err = ApiError::Http {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error with status 500: boom");
    }
}
