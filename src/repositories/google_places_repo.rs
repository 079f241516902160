use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use reqwest::{Client, Method};
use thiserror::Error;
use tracing::{debug, warn};
use crate::errors::PlacesError;

pub const API_KEY_HEADER: &str = "X-Goog-Api-Key";
pub const FIELD_MASK_HEADER: &str = "X-Goog-FieldMask";

/// Where the API key comes from. Resolved on every call, never cached.
#[derive(Clone, Debug)]
pub enum ApiKeySource {
    /// Read the named environment variable at call time.
    Environment(String),
    Fixed(Option<String>),
}

impl ApiKeySource {
    fn resolve(&self) -> Option<String> {
        let key = match self {
            ApiKeySource::Environment(name) => std::env::var(name).ok(),
            ApiKeySource::Fixed(key) => key.clone(),
        };
        key.filter(|key| !key.trim().is_empty())
    }

    fn describe(&self) -> String {
        match self {
            ApiKeySource::Environment(name) => format!("{} is not set.", name),
            ApiKeySource::Fixed(_) => "Places API key is not configured.".to_string(),
        }
    }
}

/// Retry policy for transport failures and 5xx responses. The default never retries.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff: Duration,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
}

impl OutboundRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and raw body of a completed call. Statuses >= 400 are data here.
#[derive(Clone, Debug, PartialEq)]
pub struct ProviderResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    Unavailable(String),
}

impl From<ProviderError> for PlacesError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Configuration(message) => PlacesError::Configuration(message),
            ProviderError::Unavailable(message) => PlacesError::Unavailable(message),
        }
    }
}

/// One outbound HTTP exchange. Implementations report transport failures
/// as a message; everything that produced a status is a response.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: OutboundRequest) -> Result<ProviderResponse, String>;
}

pub struct ReqwestTransport {
    http_client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: OutboundRequest) -> Result<ProviderResponse, String> {
        let mut builder = self.http_client.request(request.method, &request.url);
        for (name, value) in request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.json(&body);
        }

        let response = builder.send().await.map_err(describe_transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(describe_transport_error)?;

        Ok(ProviderResponse { status, body })
    }
}

fn describe_transport_error(e: reqwest::Error) -> String {
    if e.is_timeout() {
        format!("request timed out: {}", e)
    } else if e.is_connect() {
        format!("connection failed: {}", e)
    } else {
        format!("transport error: {}", e)
    }
}

pub struct GooglePlacesRepo {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    api_key: ApiKeySource,
    retry_policy: RetryPolicy,
}

impl GooglePlacesRepo {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        base_url: String,
        api_key: ApiKeySource,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            retry_policy: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one call to the provider. The key is resolved first so a missing
    /// key never reaches the network.
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<serde_json::Value>,
        field_mask: &str,
    ) -> Result<ProviderResponse, ProviderError> {
        let api_key = self
            .api_key
            .resolve()
            .ok_or_else(|| ProviderError::Configuration(self.api_key.describe()))?;

        let request = OutboundRequest {
            method,
            url: url.to_string(),
            headers: vec![
                ("Content-Type", "application/json".to_string()),
                (API_KEY_HEADER, api_key),
                (FIELD_MASK_HEADER, field_mask.to_string()),
            ],
            body,
        };

        let mut attempt = 0;
        loop {
            debug!("Calling places provider: {} {} fields={}", request.method, request.url, field_mask);
            let outcome = self.transport.send(request.clone()).await;

            let retryable = match &outcome {
                Ok(response) => response.status >= 500,
                Err(_) => true,
            };
            if !retryable || attempt >= self.retry_policy.max_retries {
                return outcome.map_err(ProviderError::Unavailable);
            }

            attempt += 1;
            match &outcome {
                Ok(response) => warn!(
                    "Places provider answered {}, retrying ({}/{}) in {:?}",
                    response.status, attempt, self.retry_policy.max_retries, self.retry_policy.backoff
                ),
                Err(e) => warn!(
                    "Places provider unreachable due to: {}, retrying ({}/{}) in {:?}",
                    e, attempt, self.retry_policy.max_retries, self.retry_policy.backoff
                ),
            }
            tokio::time::sleep(self.retry_policy.backoff).await;
        }
    }
}
