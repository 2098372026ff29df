//! Error types for Catapult API calls.
//!
//! This module provides the error taxonomy for the SDK: configuration
//! problems surface at construction time, API failures carry the remote
//! error shape (code, message, status), and transport failures pass through
//! from the underlying HTTP client untouched.

use crate::ApiResponse;
use http::StatusCode;

/// The main error type for Catapult API calls.
///
/// API errors preserve the remote error shape so callers can branch on the
/// error `code` the service returned rather than re-parsing response bodies.
///
/// # Examples
///
/// ```no_run
/// use catapult::{Client, Error};
///
/// # fn example() -> Result<(), Error> {
/// let client = Client::new("userId", "apiToken", "apiSecret")?;
///
/// match client.get("calls/c-1") {
///     Ok(result) => println!("Call: {:?}", result.data),
///     Err(Error::Api { code, message, status_code }) => {
///         eprintln!("API rejected the request ({}): {} - {}", status_code, code, message);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Invalid configuration was provided.
    ///
    /// This indicates a problem with how the client was constructed, such as
    /// a missing credential or an endpoint that is not a valid URL.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The API returned an error response (status >= 300).
    ///
    /// `code` and `message` come from the JSON error body when the response
    /// is JSON; otherwise `message` is the raw body text and `code` is the
    /// stringified status. Either field missing from a JSON body also falls
    /// back to the stringified status.
    #[error("Error {code}: {message}")]
    Api {
        /// The error code reported by the API.
        code: String,
        /// The human-readable error message.
        message: String,
        /// The HTTP status code of the response.
        status_code: StatusCode,
    },

    /// The client factory was given an unknown client-type name.
    #[error("Unsupported client type: {0}")]
    UnsupportedClient(String),

    /// A network-level error occurred (connection failed, DNS lookup failed,
    /// etc.).
    ///
    /// This wraps the underlying `reqwest::Error` and indicates problems at
    /// the transport layer rather than the HTTP protocol layer.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An invalid URL was provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A response body could not be parsed as JSON.
    ///
    /// Only produced by explicit [`ApiResponse::json`] calls; the client's
    /// own data extraction degrades to an empty mapping instead.
    #[error("Invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Builds an [`Error::Api`] from a failed response.
    ///
    /// The caller is responsible for only invoking this on statuses >= 300;
    /// this function does not inspect the status beyond recording it.
    ///
    /// For JSON responses, `message` and `code` come from the body's
    /// `"message"` and `"code"` fields, each defaulting to the stringified
    /// status when absent. Non-JSON (or unparseable) bodies are used verbatim
    /// as the message, with the stringified status as the code.
    pub(crate) fn from_response(response: &ApiResponse) -> Self {
        let status = response.status;
        let fallback = status.as_u16().to_string();

        let (code, message) = match response.json_value() {
            Some(body) => {
                let message = body
                    .get("message")
                    .and_then(|v| v.as_str())
                    .map(str::to_owned)
                    .unwrap_or_else(|| fallback.clone());
                let code = body
                    .get("code")
                    .and_then(|v| v.as_str())
                    .map(str::to_owned)
                    .unwrap_or_else(|| fallback.clone());
                (code, message)
            }
            None => (fallback, response.text().into_owned()),
        };

        Error::Api {
            code,
            message,
            status_code: status,
        }
    }

    /// Returns the HTTP status code if this error has one.
    ///
    /// Returns `Some(status)` for `Api` errors, `None` for other error types.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Returns the API error code if this error has one.
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::Api { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// A specialized `Result` type for Catapult API calls.
///
/// This is a convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = Error::Api {
            code: "invalid-request".to_string(),
            message: "This is error".to_string(),
            status_code: StatusCode::BAD_REQUEST,
        };
        assert_eq!(err.to_string(), "Error invalid-request: This is error");
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(err.code(), Some("invalid-request"));
    }

    #[test]
    fn test_non_api_errors_have_no_status() {
        let err = Error::Configuration("token is required".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.code(), None);
    }
}
