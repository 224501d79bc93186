// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! reqwest-backed transport

use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use tokio::runtime::Handle;
use tracing::{debug, warn};

use super::outcome::Outcome;
use super::request::WireRequest;
use super::response::{RawResponse, ResponseMeta};
use super::DEFAULT_USER_AGENT;
use crate::error::{Error, Result};
use crate::network;
use crate::transport::{channel, PendingOutcome, Transport};

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// User agent string
    pub user_agent: String,
    /// Total request timeout
    pub timeout: Duration,
    /// Connect timeout
    pub connect_timeout: Option<Duration>,
    /// Accept invalid certificates (dangerous!)
    pub accept_invalid_certs: bool,
    /// Headers sent with every request
    pub default_headers: HeaderMap,
    /// Proxy URL
    pub proxy: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert("accept", HeaderValue::from_static("*/*"));

        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: None,
            accept_invalid_certs: false,
            default_headers,
            proxy: None,
        }
    }
}

impl HttpClientConfig {
    /// Create a new client config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set total timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set connect timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Accept invalid TLS certificates
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Add a default header
    pub fn header(mut self, name: &str, value: &str) -> Result<Self> {
        let header_name = reqwest::header::HeaderName::try_from(name)
            .map_err(|e| Error::invalid_header(name, e))?;
        let header_value =
            HeaderValue::try_from(value).map_err(|e| Error::invalid_header(name, e))?;
        self.default_headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Set proxy
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }
}

/// Concrete transport over the real network stack
///
/// While an [`InterceptionHarness`](crate::network::InterceptionHarness) is
/// started, requests are routed to it instead of the network.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .default_headers(config.default_headers.clone());

        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        if let Some(ref proxy_url) = config.proxy {
            builder = builder.proxy(
                reqwest::Proxy::all(proxy_url)
                    .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?,
            );
        }

        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Get client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Perform the request and wait for its outcome
    ///
    /// Goes through the same path as [`Transport::request`], so a started
    /// harness sees it. A request withdrawn by a harness observer resolves to
    /// `Failure(Abandoned)`.
    pub async fn execute(&self, request: WireRequest) -> Outcome {
        self.request(request).await
    }

    /// Perform the request on the network and classify what came back
    async fn perform(&self, request: WireRequest) -> Outcome {
        let start = Instant::now();
        let method = request.method;
        let url = request.url.clone();

        debug!(method = %method, url = %url, "Sending request");

        let mut builder = self
            .client
            .request(method.into(), request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let (error, response, body) = match builder.send().await {
            Err(e) => (Some(Error::from(e)), None, None),
            Ok(response) => {
                let meta = ResponseMeta {
                    url: response.url().clone(),
                    status: response.status(),
                    headers: response.headers().clone(),
                };
                match response.bytes().await {
                    Ok(bytes) => (None, Some(RawResponse::Http(meta)), Some(bytes)),
                    Err(e) => (Some(Error::from(e)), Some(RawResponse::Http(meta)), None),
                }
            }
        };

        let outcome = Outcome::classify(error, response, body);
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match &outcome {
            Outcome::Success { body, response } => debug!(
                method = %method,
                url = %url,
                status = %response.status,
                bytes = body.len(),
                time_ms = elapsed_ms,
                "Request completed"
            ),
            Outcome::Failure(error) => warn!(
                method = %method,
                url = %url,
                domain = error.domain(),
                code = error.code(),
                time_ms = elapsed_ms,
                error = %error,
                "Request failed"
            ),
        }

        outcome
    }
}

impl Transport for HttpClient {
    fn request(&self, request: WireRequest) -> PendingOutcome {
        if let Some(interceptor) = network::installed_interceptor() {
            return interceptor.request(request);
        }

        let (completion, pending) = channel();
        match Handle::try_current() {
            Ok(handle) => {
                let client = self.clone();
                handle.spawn(async move {
                    let outcome = client.perform(request).await;
                    completion.complete(outcome);
                });
            }
            Err(_) => {
                completion.complete(Outcome::Failure(Error::config(
                    "no tokio runtime available to drive the request",
                )));
            }
        }
        pending
    }
}
