/*
[INPUT]:  Method, URL, headers and form fields for one request
[OUTPUT]: Raw status code and body bytes
[POS]:    HTTP layer - transport seam and reqwest implementation
[UPDATE]: When changing connection options or the transport contract
*/

use std::fmt;

use async_trait::async_trait;
use reqwest::{Client, Method, Url};

use crate::config::ClientConfig;
use crate::http::Result;

/// Request handed to a [`Transport`]
#[derive(Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: Method,
    /// Full URL including any query string
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Form-encoded body fields; empty for GET
    pub form: Vec<(String, String)>,
}

// url and form carry the api key; only the redacted URL and form keys print
impl fmt::Debug for TransportRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let form_keys: Vec<&str> = self.form.iter().map(|(key, _)| key.as_str()).collect();
        f.debug_struct("TransportRequest")
            .field("method", &self.method)
            .field("url", &self.redacted_url())
            .field("headers", &self.headers)
            .field("form", &form_keys)
            .finish()
    }
}

impl TransportRequest {
    /// URL with the query string stripped, safe to log
    pub fn redacted_url(&self) -> &str {
        self.url.split('?').next().unwrap_or_default()
    }

    pub fn query_value(&self, key: &str) -> Option<String> {
        let url = Url::parse(&self.url).ok()?;
        url.query_pairs()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.into_owned())
    }

    pub fn form_value(&self, key: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}

/// Status and body exactly as the server sent them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Sends requests to CedsonHub.
///
/// Implementations must return every status code the server produces,
/// 4xx and 5xx included, and fail only when no response was obtained.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn perform(&self, request: TransportRequest) -> Result<RawResponse>;
}

/// reqwest-backed transport used in production
#[derive(Clone)]
pub struct ReqwestTransport {
    http_client: Client,
}

impl fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestTransport").finish_non_exhaustive()
    }
}

impl ReqwestTransport {
    /// Create a transport with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(&ClientConfig::default())
    }

    /// Create a transport with custom timeouts and user agent
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn perform(&self, request: TransportRequest) -> Result<RawResponse> {
        let url = Url::parse(&request.url)?;
        let mut builder = self.http_client.request(request.method, url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !request.form.is_empty() {
            builder = builder.form(&request.form);
        }

        // reqwest errors embed the request URL, query string and api key included
        let response = builder.send().await.map_err(reqwest::Error::without_url)?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(reqwest::Error::without_url)?
            .to_vec();

        Ok(RawResponse { status, body })
    }
}
