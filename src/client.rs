//! The authenticated Catapult HTTP client.
//!
//! The [`Client`] type is the main entry point for talking to the API.
//! Use [`ClientBuilder`] to override the endpoint or version; the common
//! case is [`Client::new`] with just the three credentials.

use crate::{ApiResponse, ApiResult, Error, RequestOptions, Result};
use http::Method;
use serde::Serialize;
use std::sync::Arc;
use url::Url;

/// Default API endpoint for the Catapult service.
pub const DEFAULT_API_ENDPOINT: &str = "https://api.catapult.inetwork.com";

/// Default API version.
pub const DEFAULT_API_VERSION: &str = "v1";

/// A client for the Catapult telephony API.
///
/// The client holds an immutable configuration tuple (user id, auth pair,
/// endpoint, version) and a reusable blocking HTTP transport. Every call is
/// stateless given that configuration: no retries, no caching, no session.
///
/// # Examples
///
/// ```no_run
/// use catapult::{Client, RequestOptions};
///
/// # fn example() -> Result<(), catapult::Error> {
/// let client = Client::new("userId", "apiToken", "apiSecret")?;
///
/// // List calls for the account
/// let result = client.get(format!("users/{}/calls", client.user_id()))?;
/// println!("Calls: {}", result.data);
///
/// // Create a call; the new resource id comes from the Location header
/// let options = RequestOptions::new()
///     .with_json(&serde_json::json!({"from": "+19195551212", "to": "+19195551213"}))?;
/// let created = client.make_request("post", "calls", options)?;
/// println!("Created call {}", created.id);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::blocking::Client,
    user_id: String,
    auth: (String, String),
    api_endpoint: String,
    api_version: String,
}

impl Client {
    /// Creates a client with the default endpoint and version.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if any credential is empty.
    pub fn new(
        user_id: impl Into<String>,
        token: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<Self> {
        Client::builder()
            .user_id(user_id)
            .token(token)
            .secret(secret)
            .build()
    }

    /// Creates a new `ClientBuilder` for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Returns the configured user id.
    pub fn user_id(&self) -> &str {
        &self.inner.user_id
    }

    /// Returns the configured (token, secret) auth pair.
    pub fn auth(&self) -> (&str, &str) {
        (&self.inner.auth.0, &self.inner.auth.1)
    }

    /// Returns the configured API endpoint.
    pub fn api_endpoint(&self) -> &str {
        &self.inner.api_endpoint
    }

    /// Returns the configured API version.
    pub fn api_version(&self) -> &str {
        &self.inner.api_version
    }

    /// Issues an authenticated request and returns the raw response.
    ///
    /// Relative paths are resolved against `{endpoint}/{version}/`; absolute
    /// URLs are used exactly as given. The (token, secret) pair is always
    /// attached as HTTP basic auth. The response status is NOT inspected
    /// here; use [`Client::check_response`] or [`Client::make_request`] for
    /// that.
    ///
    /// `method` is case-insensitive (`"get"`, `"POST"`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] for transport-level failures and
    /// [`Error::InvalidUrl`] when the target cannot be composed into a valid
    /// URL.
    pub fn request(
        &self,
        method: impl AsRef<str>,
        url_or_path: impl AsRef<str>,
        options: RequestOptions,
    ) -> Result<ApiResponse> {
        let method = parse_method(method.as_ref())?;
        let mut url = self.build_url(url_or_path.as_ref())?;

        for (key, value) in &options.query_params {
            url.query_pairs_mut().append_pair(key, value);
        }

        tracing::debug!(
            method = %method,
            url = %url,
            "Issuing HTTP request"
        );

        let mut request = self
            .inner
            .http_client
            .request(method, url)
            .basic_auth(&self.inner.auth.0, Some(&self.inner.auth.1));

        for (name, value) in &options.headers {
            request = request.header(name, value);
        }

        if let Some(body) = &options.json {
            request = request.json(body);
        }

        let response = request.send()?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes()?.to_vec();

        tracing::info!(
            status = status.as_u16(),
            body_len = body.len(),
            "Received HTTP response"
        );

        Ok(ApiResponse::new(status, headers, body))
    }

    /// Checks a response for an error status.
    ///
    /// A no-op for statuses below 300. Otherwise extracts the error shape
    /// from the body (JSON `message`/`code` fields, or the raw text) and
    /// returns an [`Error::Api`].
    pub fn check_response(&self, response: &ApiResponse) -> Result<()> {
        if response.status.as_u16() < 300 {
            return Ok(());
        }

        if response.status.is_client_error() {
            tracing::error!(
                status = response.status.as_u16(),
                response = %response.text(),
                "Client error (4xx)"
            );
        } else if response.status.is_server_error() {
            tracing::warn!(
                status = response.status.as_u16(),
                response = %response.text(),
                "Server error (5xx)"
            );
        }

        Err(Error::from_response(response))
    }

    /// Issues a request, checks it, and extracts the useful parts.
    ///
    /// On success returns an [`ApiResult`] with the parsed JSON body (or an
    /// empty mapping for non-JSON responses), the raw response, and the
    /// trailing `Location` header segment as the created-resource id (empty
    /// string when the header is absent).
    ///
    /// # Errors
    ///
    /// Propagates [`Client::request`] failures and the [`Error::Api`] from
    /// [`Client::check_response`] for any status >= 300. Request and
    /// response data are discarded on the error path.
    pub fn make_request(
        &self,
        method: impl AsRef<str>,
        url_or_path: impl AsRef<str>,
        options: RequestOptions,
    ) -> Result<ApiResult> {
        let response = self.request(method, url_or_path, options)?;
        self.check_response(&response)?;

        let data = response
            .json_value()
            .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));
        let id = response.location_id().unwrap_or_default();

        Ok(ApiResult { data, response, id })
    }

    /// Makes a GET request to the specified path.
    pub fn get(&self, path: impl AsRef<str>) -> Result<ApiResult> {
        self.make_request("get", path, RequestOptions::new())
    }

    /// Makes a POST request to the specified path with a JSON body.
    pub fn post(&self, path: impl AsRef<str>, body: &impl Serialize) -> Result<ApiResult> {
        self.make_request("post", path, RequestOptions::new().with_json(body)?)
    }

    /// Makes a PUT request to the specified path with a JSON body.
    pub fn put(&self, path: impl AsRef<str>, body: &impl Serialize) -> Result<ApiResult> {
        self.make_request("put", path, RequestOptions::new().with_json(body)?)
    }

    /// Makes a DELETE request to the specified path.
    pub fn delete(&self, path: impl AsRef<str>) -> Result<ApiResult> {
        self.make_request("delete", path, RequestOptions::new())
    }

    /// Resolves `url_or_path` into the absolute request URL.
    fn build_url(&self, url_or_path: &str) -> Result<Url> {
        match Url::parse(url_or_path) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let path = url_or_path.trim_start_matches('/');
                let base = self.inner.api_endpoint.trim_end_matches('/');
                Ok(Url::parse(&format!(
                    "{}/{}/{}",
                    base, self.inner.api_version, path
                ))?)
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn parse_method(method: &str) -> Result<Method> {
    Method::from_bytes(method.to_ascii_uppercase().as_bytes())
        .map_err(|_| Error::Configuration(format!("Invalid HTTP method: {}", method)))
}

/// Builder for configuring and creating a [`Client`].
///
/// # Examples
///
/// ```no_run
/// use catapult::ClientBuilder;
///
/// # fn example() -> Result<(), catapult::Error> {
/// let client = ClientBuilder::new()
///     .user_id("userId")
///     .token("apiToken")
///     .secret("apiSecret")
///     .api_endpoint("https://api.example.com")
///     .api_version("v2")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    user_id: Option<String>,
    token: Option<String>,
    secret: Option<String>,
    api_endpoint: String,
    api_version: String,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with the default endpoint and version.
    pub fn new() -> Self {
        Self {
            user_id: None,
            token: None,
            secret: None,
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Sets the account user id.
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Sets the API token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the API secret.
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Overrides the API endpoint.
    pub fn api_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = endpoint.into();
        self
    }

    /// Overrides the API version.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if user id, token, or secret is
    /// missing or empty, or if the HTTP transport cannot be constructed.
    pub fn build(self) -> Result<Client> {
        let user_id = require(self.user_id, "user_id")?;
        let token = require(self.token, "token")?;
        let secret = require(self.secret, "secret")?;

        let http_client = reqwest::blocking::Client::builder().build().map_err(|e| {
            Error::Configuration(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Client {
            inner: Arc::new(ClientInner {
                http_client,
                user_id,
                auth: (token, secret),
                api_endpoint: self.api_endpoint,
                api_version: self.api_version,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn require(value: Option<String>, name: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::Configuration(format!("{} is required", name))),
    }
}
