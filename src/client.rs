//! Mandrill async client and the shared request executor.

use crate::{Error, Result};
use flate2::read::GzDecoder;
use reqwest::header::{
    ACCEPT, ACCEPT_ENCODING, CONTENT_ENCODING, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::io::Read;
use std::time::Duration;

/// Async client for the Mandrill transactional email API.
///
/// Holds the API key and the HTTP transport; immutable after construction and
/// safe to share across tasks. Use [`Client::new`] for defaults or
/// [`Client::builder`] for custom settings like a timeout, a custom transport,
/// or an alternate base URL.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    user_agent: String,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// Create a new Mandrill client with default settings.
    ///
    /// # Examples
    /// ```no_run
    /// # use mandrill_client::Client;
    /// # fn main() -> Result<(), mandrill_client::Error> {
    /// let client = Client::new("your-api-key")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(api_key).build()
    }

    /// Send a POST request to an API endpoint and return the raw response
    /// body.
    ///
    /// The payload is serialized to JSON and the API key is merged into it
    /// under the `key` field before sending. Responses are inspected
    /// structurally, independent of HTTP status: a body that matches the
    /// API's four-field error document becomes [`Error::Api`]; anything else
    /// comes back verbatim for the caller to decode.
    ///
    /// Every resource method goes through here; it is public as an escape
    /// hatch for endpoints without a typed wrapper.
    ///
    /// # Errors
    /// [`Error::EmptyRequest`] if `payload` serializes to JSON `null`
    /// (detected before any network activity), [`Error::Serialize`] if it
    /// cannot be encoded, [`Error::Transport`] for network, TLS, or
    /// decompression failures, and [`Error::Api`] for structured API errors.
    pub async fn execute<T>(&self, path: &str, payload: &T) -> Result<Vec<u8>>
    where
        T: Serialize + ?Sized,
    {
        let body = self.envelope(payload)?;
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .post(&url)
            .headers(self.headers())
            .body(body)
            .send()
            .await?;

        let gzipped = response
            .headers()
            .get(CONTENT_ENCODING)
            .is_some_and(|v| v.as_bytes().eq_ignore_ascii_case(b"gzip"));
        let raw = response.bytes().await?;

        let raw = if gzipped {
            let mut decoded = Vec::new();
            GzDecoder::new(raw.as_ref())
                .read_to_end(&mut decoded)
                .map_err(|e| Error::Transport(e.into()))?;
            decoded
        } else {
            raw.to_vec()
        };

        // The API delivers error documents on 200 as well as on error
        // statuses, so the body shape decides, not the status code.
        match serde_json::from_slice::<crate::ApiError>(&raw) {
            Ok(api_error) => Err(Error::Api(api_error)),
            Err(_) => Ok(raw),
        }
    }

    /// Send a request and decode the response into `R`.
    ///
    /// Typed layer over [`Client::execute`]; decode failures surface as
    /// [`Error::Deserialize`].
    pub async fn call<T, R>(&self, path: &str, payload: &T) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let raw = self.execute(path, payload).await?;
        serde_json::from_slice(&raw).map_err(Error::Deserialize)
    }

    /// Serialize the payload and merge the API key into the envelope.
    fn envelope<T>(&self, payload: &T) -> Result<Vec<u8>>
    where
        T: Serialize + ?Sized,
    {
        let mut value = serde_json::to_value(payload).map_err(Error::Serialize)?;
        match &mut value {
            Value::Null => return Err(Error::EmptyRequest),
            Value::Object(fields) => {
                fields.insert("key".to_string(), Value::String(self.api_key.clone()));
            }
            // Non-object payloads go out untouched; the API rejects them
            // with a ValidationError.
            _ => {}
        }
        serde_json::to_vec(&value).map_err(Error::Serialize)
    }

    /// Build headers for API requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));
        if let Ok(value) = HeaderValue::from_str(&self.user_agent) {
            headers.insert(USER_AGENT, value);
        }
        headers
    }
}

/// Base URL of the Mandrill API.
pub const API_BASE_URL: &str = "https://mandrillapp.com/api/1.0";

const USER_AGENT_VALUE: &str = concat!("mandrill-client-rs/", env!("CARGO_PKG_VERSION"));

/// Builder for configuring a Mandrill client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    user_agent: String,
    timeout: Option<Duration>,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - The public Mandrill API base URL
    /// - Default user agent
    /// - No request timeout
    /// - A fresh `reqwest` client
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: API_BASE_URL.to_string(),
            user_agent: USER_AGENT_VALUE.to_string(),
            timeout: None,
            http: None,
        }
    }

    /// Override the API base URL.
    ///
    /// Useful for pointing the client at a mock server in tests.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a total request timeout.
    ///
    /// Ignored when a custom transport is supplied with
    /// [`ClientBuilder::http_client`]; configure the timeout on that client
    /// instead.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Supply a preconfigured `reqwest` client as the transport.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the client.
    ///
    /// # Examples
    /// ```no_run
    /// # use mandrill_client::Client;
    /// # use std::time::Duration;
    /// # fn main() -> Result<(), mandrill_client::Error> {
    /// let client = Client::builder("your-api-key")
    ///     .timeout(Duration::from_secs(30))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Client> {
        let http = match self.http {
            Some(http) => http,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(Client {
            http,
            api_key: self.api_key,
            base_url: self.base_url,
            user_agent: self.user_agent,
        })
    }
}

/// Payload for endpoints that take nothing but the API key.
#[derive(Debug, Serialize)]
pub(crate) struct KeyOnlyRequest {}

/// `skip_serializing_if` helper for flags the API treats the same when
/// absent as when false.
pub(crate) fn is_false(flag: &bool) -> bool {
    !*flag
}
