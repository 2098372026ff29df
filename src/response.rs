//! Response value types.
//!
//! The transport layer normalizes every HTTP response into an immutable
//! [`ApiResponse`] value before any status checking or data extraction
//! happens, so the classification logic never touches a live connection.

use http::{HeaderMap, StatusCode};
use std::borrow::Cow;

/// An immutable snapshot of an HTTP response.
///
/// Constructed by [`Client::request`](crate::Client::request) from the
/// transport response and passed by reference into the checking and
/// extraction logic. Never mutated after construction.
///
/// # Examples
///
/// ```no_run
/// use catapult::Client;
///
/// # fn example() -> Result<(), catapult::Error> {
/// let client = Client::new("userId", "apiToken", "apiSecret")?;
/// let response = client.request("get", "account", Default::default())?;
///
/// println!("Status: {}", response.status);
/// if response.is_json() {
///     println!("Body: {}", response.json()?);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// The HTTP status code of the response.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// The raw response body.
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Creates a new `ApiResponse`.
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Returns `true` if the `Content-Type` header indicates a JSON body.
    pub fn is_json(&self) -> bool {
        self.header("content-type")
            .is_some_and(|ct| ct.contains("json"))
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if the body is not valid
    /// JSON.
    pub fn json(&self) -> crate::Result<serde_json::Value> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Parses the body as JSON when the content type says so.
    ///
    /// Returns `None` for non-JSON content types and for JSON content types
    /// whose body does not actually parse.
    pub(crate) fn json_value(&self) -> Option<serde_json::Value> {
        if self.is_json() {
            serde_json::from_slice(&self.body).ok()
        } else {
            None
        }
    }

    /// Returns a header value by name.
    ///
    /// # Examples
    ///
    /// ```
    /// # use catapult::ApiResponse;
    /// # use http::{HeaderMap, HeaderValue, StatusCode};
    /// let mut headers = HeaderMap::new();
    /// headers.insert("content-type", HeaderValue::from_static("application/json"));
    ///
    /// let response = ApiResponse::new(StatusCode::OK, headers, Vec::new());
    /// assert_eq!(response.header("content-type"), Some("application/json"));
    /// ```
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }

    /// Extracts the trailing path segment of the `Location` header.
    ///
    /// The Catapult API reports the id of a newly created resource as the
    /// final `/`-delimited segment of the `Location` URL.
    ///
    /// # Examples
    ///
    /// ```
    /// # use catapult::ApiResponse;
    /// # use http::{HeaderMap, HeaderValue, StatusCode};
    /// let mut headers = HeaderMap::new();
    /// headers.insert("location", HeaderValue::from_static("http://localhost/path/id"));
    ///
    /// let response = ApiResponse::new(StatusCode::CREATED, headers, Vec::new());
    /// assert_eq!(response.location_id(), Some("id".to_string()));
    /// ```
    pub fn location_id(&self) -> Option<String> {
        let location = self.header("location")?;
        location.rsplit('/').next().map(str::to_owned)
    }
}

/// The result of a checked API call.
///
/// Produced by [`Client::make_request`](crate::Client::make_request): the
/// parsed JSON body (or an empty mapping for non-JSON responses), the raw
/// [`ApiResponse`], and the created-resource id extracted from the
/// `Location` header (empty when the header is absent).
#[derive(Debug, Clone)]
pub struct ApiResult {
    /// The parsed JSON body, or an empty object for non-JSON responses.
    pub data: serde_json::Value,

    /// The raw response the data was extracted from.
    pub response: ApiResponse,

    /// The trailing `Location` path segment, or `""` when absent.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn response_with_header(name: &'static str, value: &'static str) -> ApiResponse {
        let mut headers = HeaderMap::new();
        headers.insert(name, HeaderValue::from_static(value));
        ApiResponse::new(StatusCode::OK, headers, Vec::new())
    }

    #[test]
    fn test_is_json_matches_parameterized_content_type() {
        let response = response_with_header("content-type", "application/json; charset=utf-8");
        assert!(response.is_json());

        let response = response_with_header("content-type", "text/plain");
        assert!(!response.is_json());
    }

    #[test]
    fn test_is_json_without_content_type() {
        let response = ApiResponse::new(StatusCode::OK, HeaderMap::new(), Vec::new());
        assert!(!response.is_json());
    }

    #[test]
    fn test_location_id_takes_trailing_segment() {
        let response = response_with_header("location", "http://localhost/path/id");
        assert_eq!(response.location_id(), Some("id".to_string()));
    }

    #[test]
    fn test_location_id_missing_header() {
        let response = ApiResponse::new(StatusCode::OK, HeaderMap::new(), Vec::new());
        assert_eq!(response.location_id(), None);
    }

    #[test]
    fn test_json_value_requires_json_content_type() {
        let response = ApiResponse::new(
            StatusCode::OK,
            HeaderMap::new(),
            b"{\"data\": \"data\"}".to_vec(),
        );
        assert!(response.json_value().is_none());

        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        let response = ApiResponse::new(StatusCode::OK, headers, b"{\"data\": \"data\"}".to_vec());
        assert_eq!(
            response.json_value(),
            Some(serde_json::json!({"data": "data"}))
        );
    }
}
