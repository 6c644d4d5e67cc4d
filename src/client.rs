//! Echo Nest API client.
//!
//! [`EchonestApi`] holds the HTTP client and credentials and provides the
//! shared request/dispatch machinery. The per-resource operations live in
//! the [`crate::api`] modules and are thin wrappers over [`fetch_list`]
//! and [`fetch_single`].
//!
//! [`fetch_list`]: EchonestApi::fetch_list
//! [`fetch_single`]: EchonestApi::fetch_single

use std::fmt;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::api::Endpoint;
use crate::error::{EchonestError, Result};
use crate::options::Options;

/// Base URL for the Echo Nest API.
const API_BASE_URL: &str = "https://developer.echonest.com";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default connection timeout in seconds.
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Echo Nest API client.
///
/// Stateless apart from the credentials; clones share the underlying
/// connection pool and concurrent calls need no coordination.
///
/// # Example
///
/// ```rust,no_run
/// use echonest::{EchonestApi, Options};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = EchonestApi::new("your_api_key")?;
///     let artists = api
///         .artist_search(&Options::new().set("name", "radiohead"))
///         .await?;
///     println!("Found {} artists", artists.len());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct EchonestApi {
    client: Client,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for EchonestApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EchonestApi")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl EchonestApi {
    /// Create a new client with the given API key.
    ///
    /// # Errors
    /// Returns [`EchonestError::MissingApiKey`] if the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, API_BASE_URL)
    }

    /// Create a client pointed at an alternative base URL.
    ///
    /// Useful for tests against a stub server.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(EchonestError::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .user_agent(concat!("echonest-rs/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into(),
        })
    }

    /// Create a client from the `ECHONEST_API_KEY` environment variable.
    ///
    /// # Errors
    /// - [`EchonestError::MissingApiKey`] if the variable is unset or empty
    /// - [`EchonestError::InvalidInput`] if it contains invalid UTF-8
    pub fn from_env() -> Result<Self> {
        match std::env::var("ECHONEST_API_KEY") {
            Ok(key) if key.is_empty() => Err(EchonestError::MissingApiKey),
            Ok(key) => Self::new(key),
            Err(std::env::VarError::NotPresent) => Err(EchonestError::MissingApiKey),
            Err(std::env::VarError::NotUnicode(_)) => Err(EchonestError::InvalidInput(
                "ECHONEST_API_KEY contains invalid UTF-8".to_string(),
            )),
        }
    }

    /// Issue a GET request and return the `response` envelope object.
    ///
    /// Attaches `api_key` and `format=json` ahead of the caller's options.
    pub(crate) async fn get_response(&self, path: &str, options: &Options) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);

        let mut query: Vec<(String, String)> = vec![
            ("api_key".to_string(), self.api_key.clone()),
            ("format".to_string(), "json".to_string()),
        ];
        query.extend(options.to_query());

        debug!(%url, params = query.len(), "GET");

        let response = self.client.get(&url).query(&query).send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(EchonestError::Unauthorized);
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("Echo Nest API rate limited");
            return Err(EchonestError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                format!("HTTP {}", status)
            } else {
                body
            };
            return Err(EchonestError::Api {
                code: i64::from(status.as_u16()),
                message,
            });
        }

        let body: Value = response.json().await?;
        let envelope = match body.get("response") {
            Some(envelope) if envelope.is_object() => envelope.clone(),
            _ => {
                return Err(EchonestError::MalformedResponse(
                    "missing `response` object in body".to_string(),
                ))
            }
        };

        // Some failures arrive inside a 200 envelope via the status block.
        if let Some(code) = envelope.pointer("/status/code").and_then(Value::as_i64) {
            if code != 0 {
                let message = envelope
                    .pointer("/status/message")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown error")
                    .to_string();
                warn!(code, %message, "Echo Nest API error");
                return Err(match code {
                    1 | 2 => EchonestError::Unauthorized,
                    3 => EchonestError::RateLimited,
                    _ => EchonestError::Api { code, message },
                });
            }
        }

        Ok(envelope)
    }

    /// Fetch a list-arity endpoint: one result per envelope array element,
    /// in array order. An absent or null envelope key yields an empty
    /// vector, never an error.
    pub(crate) async fn fetch_list<T>(&self, endpoint: &Endpoint, options: &Options) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let response = self.get_response(endpoint.path, options).await?;

        match response.get(endpoint.envelope_key) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| serde_json::from_value(item.clone()).map_err(EchonestError::from))
                .collect(),
            Some(other) => Err(EchonestError::MalformedResponse(format!(
                "expected array at `{}`, found {}",
                endpoint.envelope_key,
                json_type_name(other)
            ))),
        }
    }

    /// Fetch a single-arity endpoint. An absent or null envelope key
    /// yields the result type's default value, never an error.
    pub(crate) async fn fetch_single<T>(&self, endpoint: &Endpoint, options: &Options) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let response = self.get_response(endpoint.path, options).await?;

        match response.get(endpoint.envelope_key) {
            None | Some(Value::Null) => Ok(T::default()),
            Some(value) => Ok(serde_json::from_value(value.clone())?),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
