//! HTTP client for the Buffer v1 REST API.
//!
//! Every call goes through [`BufferClient::api`]: the path is normalised to a
//! `.json` endpoint under the base URL, one request is sent with the bearer
//! token attached, the whole body is read, and the outcome is classified
//! before any JSON decoding happens. There is no retry, caching or
//! pagination; callers that want those layer them on top.

use std::time::Duration;

use bufferapi_core::{ClientConfig, DEFAULT_BASE_URL};
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;

use crate::error::BufferError;
use crate::form::FormEncode;
use crate::types::{NewUpdate, Profile, UpdateResponse};

const DEFAULT_USER_AGENT: &str = "bufferapi-rs/0.1";

/// Bodies shorter than this cannot be a JSON object or array.
const MIN_BODY_LEN: usize = 2;

/// Client for the Buffer REST API.
///
/// Holds the access token, the base URL and a `reqwest::Client`. It is
/// immutable after construction and can be shared freely between tasks.
/// Use [`BufferClient::new`] for production or [`BufferClient::with_base_url`]
/// to point at a mock server in tests.
#[derive(Clone)]
pub struct BufferClient {
    client: Client,
    access_token: String,
    base_url: Url,
}

impl std::fmt::Debug for BufferClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferClient")
            .field("access_token", &"[redacted]")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl BufferClient {
    /// Creates a new client pointed at the production Buffer API.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Transport`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(access_token: &str, timeout_secs: u64) -> Result<Self, BufferError> {
        Self::with_base_url(access_token, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Transport`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`BufferError::InvalidBaseUrl`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        access_token: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, BufferError> {
        let client = build_http_client(timeout_secs, DEFAULT_USER_AGENT)?;
        Self::with_http_client(access_token, client, base_url)
    }

    /// Creates a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Same as [`BufferClient::with_base_url`].
    pub fn from_config(config: &ClientConfig) -> Result<Self, BufferError> {
        let client = build_http_client(config.request_timeout_secs, &config.user_agent)?;
        Self::with_http_client(&config.access_token, client, &config.base_url)
    }

    /// Wraps a caller-supplied `reqwest::Client`.
    ///
    /// Connection pooling, proxies, TLS and timeouts are whatever that client
    /// was built with. The bearer token is attached to every request.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidBaseUrl`] if `base_url` is not a valid URL.
    pub fn with_http_client(
        access_token: &str,
        client: Client,
        base_url: &str,
    ) -> Result<Self, BufferError> {
        // Exactly one trailing slash, otherwise `Url::join` would replace the
        // last path segment (`/1` -> `/profiles.json`).
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| BufferError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(BufferError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot be used as a base".to_owned(),
            });
        }

        Ok(Self {
            client,
            access_token: access_token.to_owned(),
            base_url: parsed,
        })
    }

    /// The bearer token attached to every request.
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// The API root every resource path is joined onto; always ends in `/`.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute endpoint URL for a resource path.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::InvalidPath`] if the path cannot be joined onto
    /// the base URL.
    pub fn endpoint_url(&self, path: &str) -> Result<Url, BufferError> {
        let normalised = normalize_path(path);
        self.base_url
            .join(&normalised)
            .map_err(|e| BufferError::InvalidPath {
                path: path.to_owned(),
                reason: e.to_string(),
            })
    }

    /// Issues one request and returns the raw response body.
    ///
    /// Only `GET` and `POST` are supported. `POST` sends `payload` form-encoded
    /// (an empty body when `None`); `GET` ignores it.
    ///
    /// # Errors
    ///
    /// - [`BufferError::UnsupportedMethod`] for any verb other than GET/POST.
    /// - [`BufferError::HttpStatus`] when the status is 400 or above, even if
    ///   the body could not be read.
    /// - [`BufferError::Transport`] on network failure, or if the body of a
    ///   non-error response cannot be read.
    /// - [`BufferError::MalformedResponse`] when the body is under two bytes.
    pub async fn api(
        &self,
        method: Method,
        path: &str,
        payload: Option<&dyn FormEncode>,
    ) -> Result<Vec<u8>, BufferError> {
        let url = self.endpoint_url(path)?;

        let request = match method {
            Method::GET => self.client.get(url.clone()),
            Method::POST => {
                let pairs = payload.map(|p| p.form_pairs()).unwrap_or_default();
                self.client.post(url.clone()).form(&pairs)
            }
            other => return Err(BufferError::UnsupportedMethod(other.to_string())),
        };

        tracing::debug!(%method, %url, "sending Buffer API request");
        let response = request.bearer_auth(&self.access_token).send().await?;

        // Drain the body before looking at the status so the connection is
        // released. A failed read only surfaces once the status is known to
        // be good; a >= 400 status is always reported as such.
        let status = response.status();
        let body = response.bytes().await;
        tracing::debug!(
            %method,
            %url,
            status = status.as_u16(),
            bytes = body.as_ref().map_or(0, |b| b.len()),
            "received Buffer API response"
        );

        if status.as_u16() >= 400 {
            return Err(BufferError::HttpStatus {
                status,
                url: url.to_string(),
            });
        }
        let body = body?;
        if body.len() < MIN_BODY_LEN {
            return Err(BufferError::MalformedResponse {
                len: body.len(),
                url: url.to_string(),
            });
        }

        Ok(body.to_vec())
    }

    /// `GET` a resource path, returning the raw body.
    ///
    /// # Errors
    ///
    /// See [`BufferClient::api`].
    pub async fn get(&self, path: &str) -> Result<Vec<u8>, BufferError> {
        self.api(Method::GET, path, None).await
    }

    /// `POST` a resource path with an optional form payload, returning the raw
    /// body.
    ///
    /// # Errors
    ///
    /// See [`BufferClient::api`].
    pub async fn post(
        &self,
        path: &str,
        payload: Option<&dyn FormEncode>,
    ) -> Result<Vec<u8>, BufferError> {
        self.api(Method::POST, path, payload).await
    }

    /// `GET` a resource path and decode the body as `T`.
    ///
    /// # Errors
    ///
    /// Anything [`BufferClient::api`] returns, or [`BufferError::Deserialize`]
    /// if the body does not match `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BufferError> {
        let body = self.get(path).await?;
        decode(&body, path)
    }

    /// Lists the social profiles connected to the authenticated account.
    ///
    /// # Errors
    ///
    /// Anything [`BufferClient::api`] returns, or [`BufferError::Deserialize`]
    /// if the body is not a list of profiles.
    pub async fn profiles(&self) -> Result<Vec<Profile>, BufferError> {
        self.get_json("profiles.json").await
    }

    /// Creates (queues or immediately shares) an update on one or more
    /// profiles.
    ///
    /// # Errors
    ///
    /// - Anything [`BufferClient::api`] returns.
    /// - [`BufferError::Deserialize`] if the body is not an update response.
    /// - [`BufferError::ApiRejected`] with the raw body if the response says
    ///   `"success": false`, whatever the HTTP status was.
    pub async fn create_update(&self, update: &NewUpdate) -> Result<UpdateResponse, BufferError> {
        const PATH: &str = "updates/create.json";

        let body = self.post(PATH, Some(update)).await?;
        let response: UpdateResponse = decode(&body, PATH)?;
        if !response.success {
            return Err(BufferError::ApiRejected(
                String::from_utf8_lossy(&body).into_owned(),
            ));
        }
        Ok(response)
    }

    /// Permanently deletes an update.
    ///
    /// Any non-error response counts as success; the body is not decoded.
    ///
    /// # Errors
    ///
    /// See [`BufferClient::api`].
    pub async fn destroy_update(&self, update_id: &str) -> Result<(), BufferError> {
        self.post(&format!("updates/{update_id}/destroy.json"), None)
            .await?;
        Ok(())
    }
}

/// Appends `.json` to a resource path unless it is already there, and drops
/// any leading `/` so the path stays relative to the API root.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let path = path.trim_start_matches('/');
    if path.ends_with(".json") {
        path.to_owned()
    } else {
        format!("{path}.json")
    }
}

fn build_http_client(timeout_secs: u64, user_agent: &str) -> Result<Client, BufferError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

fn decode<T: DeserializeOwned>(body: &[u8], context: &str) -> Result<T, BufferError> {
    serde_json::from_slice(body).map_err(|e| BufferError::Deserialize {
        context: context.to_owned(),
        source: e,
    })
}
