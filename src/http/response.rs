// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP response metadata

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use url::Url;

use crate::error::{Error, Result};

/// Metadata of a well-formed HTTP response
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseMeta {
    /// Final response URL
    pub url: Url,
    /// Response status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
}

impl ResponseMeta {
    /// Create response metadata with no headers
    pub fn new(url: Url, status: StatusCode) -> Self {
        Self {
            url,
            status,
            headers: HeaderMap::new(),
        }
    }

    /// Create response metadata from a raw status code
    pub fn from_status(url: Url, status: u16) -> Result<Self> {
        let status = StatusCode::from_u16(status)
            .map_err(|e| Error::config(format!("invalid status code {}: {}", status, e)))?;
        Ok(Self::new(url, status))
    }

    /// Add a header
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = name.as_ref();
        let header_name =
            HeaderName::try_from(name).map_err(|e| Error::invalid_header(name, e))?;
        let header_value =
            HeaderValue::try_from(value.as_ref()).map_err(|e| Error::invalid_header(name, e))?;
        self.headers.append(header_name, header_value);
        Ok(self)
    }

    /// Check if status is success (2xx)
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Check if status is client error (4xx)
    pub fn is_client_error(&self) -> bool {
        self.status.is_client_error()
    }

    /// Check if status is server error (5xx)
    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }

    /// Get status code as u16
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Get a header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Get content type
    pub fn content_type(&self) -> Option<&str> {
        self.header(CONTENT_TYPE.as_str())
    }
}

/// What the network stack handed back in place of a response
///
/// Transports that can only ever produce HTTP responses always report
/// `Http`. `NonHttp` models a stack that answered with something that is not
/// an HTTP response (e.g. a file or data URL response).
#[derive(Debug, Clone, PartialEq)]
pub enum RawResponse {
    /// A well-formed HTTP response
    Http(ResponseMeta),
    /// A response without HTTP status semantics
    NonHttp { url: Url },
}

impl RawResponse {
    /// The HTTP metadata, if this is an HTTP response
    pub fn as_http(&self) -> Option<&ResponseMeta> {
        match self {
            RawResponse::Http(meta) => Some(meta),
            RawResponse::NonHttp { .. } => None,
        }
    }

    /// Response URL
    pub fn url(&self) -> &Url {
        match self {
            RawResponse::Http(meta) => &meta.url,
            RawResponse::NonHttp { url } => url,
        }
    }
}

impl From<ResponseMeta> for RawResponse {
    fn from(meta: ResponseMeta) -> Self {
        RawResponse::Http(meta)
    }
}
