//! The transport invoker: one authenticated HTTP request per call, with
//! automatic retry for transient server failures and status-code
//! classification into the crate's error taxonomy.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Method;
use serde_json::Value;

use crate::config::Credentials;
use crate::error::{Error, Result};
use crate::params::Params;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Issues HTTP requests against the API.
///
/// The invoker handles:
/// - URL normalization (the fixed `.json` format suffix)
/// - Basic authentication from the account credentials
/// - Identifying `User-Agent` and `Accept: application/json` headers
/// - One automatic retry for responses with status >= 500
/// - Classification of non-success responses into [`Error`] kinds
///
/// # Thread Safety
///
/// `Invoker` is `Send + Sync` and is shared behind an `Arc` by every handle
/// a client produces.
#[derive(Debug)]
pub struct Invoker {
    /// The internal reqwest HTTP client.
    http: reqwest::Client,
    /// Credentials sent as basic auth on every request.
    credentials: Credentials,
    /// API origin (e.g. `https://api.twilio.com`), used to resolve
    /// server-relative URIs such as `next_page_uri`.
    api_base: String,
}

// Verify Invoker is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Invoker>();
};

impl Invoker {
    /// Creates an invoker for the given credentials and API origin.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created, which
    /// should only happen on TLS initialization failure.
    #[must_use]
    pub fn new(credentials: Credentials, api_base: impl Into<String>) -> Self {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("Twilio API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&user_agent) {
            default_headers.insert(USER_AGENT, value);
        }
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .default_headers(default_headers)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            credentials,
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// The credentials this invoker authenticates with.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The API origin this invoker resolves relative URIs against.
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Turns a server-supplied URI into an absolute URL.
    ///
    /// Absolute URLs pass through unchanged; anything else is joined to the
    /// API origin.
    #[must_use]
    pub fn resolve(&self, uri: &str) -> String {
        if uri.starts_with("http://") || uri.starts_with("https://") {
            uri.to_string()
        } else {
            format!("{}{}", self.api_base, uri)
        }
    }

    /// Sends one request and returns the parsed JSON body.
    ///
    /// The target URL gets the `.json` format suffix appended ahead of any
    /// query string; parameters are encoded through [`Params::encode`] for
    /// both the query string and the form body.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] for status 404, carrying the requested URL
    /// - [`Error::InvalidRequest`] for status 400
    /// - [`Error::Service`] for any other non-2xx status, after one
    ///   automatic retry when the status is >= 500
    /// - [`Error::Network`] for transport failures
    /// - [`Error::Decode`] when a 2xx body is not valid JSON
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        query: Option<&Params>,
        form: Option<&Params>,
    ) -> Result<Value> {
        let url = format_url(url);
        let query = query.map(Params::encode).filter(|pairs| !pairs.is_empty());
        let form = form.map(Params::encode);

        let mut retried = false;
        loop {
            let mut builder = self.http.request(method.clone(), &url).basic_auth(
                self.credentials.account_sid(),
                Some(self.credentials.auth_token()),
            );
            if let Some(pairs) = &query {
                builder = builder.query(pairs);
            }
            if let Some(pairs) = &form {
                builder = builder.form(pairs);
            }

            tracing::debug!(%method, %url, "dispatching API request");
            let response = builder.send().await?;
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            if status.is_success() {
                if body.is_empty() {
                    return Ok(Value::Object(serde_json::Map::new()));
                }
                return Ok(serde_json::from_str(&body)?);
            }

            if status.as_u16() >= 500 && !retried {
                retried = true;
                tracing::warn!(status = status.as_u16(), %url, "server error, retrying once");
                continue;
            }

            return Err(classify(status.as_u16(), &url, extract_message(&body)));
        }
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`Invoker::request`].
    pub async fn get(&self, url: &str, query: Option<&Params>) -> Result<Value> {
        self.request(Method::GET, url, query, None).await
    }

    /// Sends a form-encoded POST request.
    ///
    /// # Errors
    ///
    /// See [`Invoker::request`].
    pub async fn post(&self, url: &str, form: &Params) -> Result<Value> {
        self.request(Method::POST, url, None, Some(form)).await
    }

    /// Sends a DELETE request, discarding the response body.
    ///
    /// # Errors
    ///
    /// See [`Invoker::request`].
    pub async fn delete(&self, url: &str) -> Result<()> {
        self.request(Method::DELETE, url, None, None).await?;
        Ok(())
    }
}

/// Appends the fixed `.json` format suffix ahead of any query string,
/// stripping a pre-existing suffix first so server-supplied URIs are not
/// suffixed twice.
fn format_url(url: &str) -> String {
    let (path, query) = url
        .split_once('?')
        .map_or((url, None), |(path, query)| (path, Some(query)));
    let path = path.strip_suffix(".json").unwrap_or(path);
    query.map_or_else(
        || format!("{path}.json"),
        |query| format!("{path}.json?{query}"),
    )
}

/// Pulls a human-readable message out of an error body, if there is one.
fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(String::from)
}

/// Maps a non-success status to an error kind. Callers distinguish
/// "absent", "caller mistake", and "server fault" by variant, never by
/// message text.
fn classify(status: u16, url: &str, message: Option<String>) -> Error {
    match status {
        404 => Error::NotFound {
            url: url.to_string(),
        },
        400 => Error::InvalidRequest {
            message: message.unwrap_or_else(|| "the request was invalid".to_string()),
        },
        _ => Error::Service {
            status,
            message: message.unwrap_or_else(|| "the API is unavailable".to_string()),
        },
    }
}
