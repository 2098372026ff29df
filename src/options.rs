//! Per-request options.

use http::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use std::collections::HashMap;

/// Pass-through options for an individual request.
///
/// Everything here is handed to the transport as-is: extra headers, query
/// parameters, and an optional JSON body. The method and target are supplied
/// separately to [`Client::request`](crate::Client::request).
///
/// # Examples
///
/// ```no_run
/// use catapult::{Client, RequestOptions};
///
/// # fn example() -> Result<(), catapult::Error> {
/// let client = Client::new("userId", "apiToken", "apiSecret")?;
///
/// let options = RequestOptions::new()
///     .with_query_param("size", "25")
///     .with_json(&serde_json::json!({"to": "+19195551234"}))?;
///
/// let result = client.make_request("post", "calls", options)?;
/// println!("Created call {}", result.id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Additional headers for this request.
    pub headers: HeaderMap,

    /// Query parameters for this request.
    pub query_params: HashMap<String, String>,

    /// Optional JSON request body.
    pub json: Option<serde_json::Value>,
}

impl RequestOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header to the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn with_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, crate::Error> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| crate::Error::Configuration(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| crate::Error::Configuration(format!("Invalid header value: {}", e)))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Adds a query parameter to the request.
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(key.into(), value.into());
        self
    }

    /// Adds multiple query parameters to the request.
    pub fn with_query_params(
        mut self,
        params: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        self.query_params.extend(params);
        self
    }

    /// Sets the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be serialized to JSON.
    pub fn with_json(mut self, body: &impl Serialize) -> Result<Self, crate::Error> {
        self.json = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}
