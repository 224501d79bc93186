// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Wire request types and the pure request builder

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use super::JSON_MEDIA_TYPE;
use crate::error::{Error, Result};

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Method name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            other => Err(Error::config(format!("unsupported HTTP method '{}'", other))),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Fully resolved, transport-ready request
///
/// Built fresh for each call and handed to a transport by value.
#[derive(Debug, Clone, PartialEq)]
pub struct WireRequest {
    /// Request method
    pub method: HttpMethod,
    /// Absolute request URL
    pub url: Url,
    /// Request headers
    pub headers: HeaderMap,
    /// Request body
    pub body: Option<Bytes>,
}

impl WireRequest {
    /// Create a request with no headers and no body
    pub fn new(method: HttpMethod, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Set a header, replacing any previous value
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = name.as_ref();
        let header_name =
            HeaderName::try_from(name).map_err(|e| Error::invalid_header(name, e))?;
        let header_value =
            HeaderValue::try_from(value.as_ref()).map_err(|e| Error::invalid_header(name, e))?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Set multiple headers
    ///
    /// Names are applied in sorted order. Names that differ only in case
    /// are kept as separate values of one header, in that order.
    pub fn headers(mut self, headers: &HashMap<String, String>) -> Result<Self> {
        let mut sorted: Vec<_> = headers.iter().collect();
        sorted.sort();

        let mut applied = HashSet::new();
        for (name, value) in sorted {
            let header_name =
                HeaderName::try_from(name.as_str()).map_err(|e| Error::invalid_header(name, e))?;
            let header_value =
                HeaderValue::try_from(value.as_str()).map_err(|e| Error::invalid_header(name, e))?;
            if applied.insert(header_name.clone()) {
                self.headers.insert(header_name, header_value);
            } else {
                self.headers.append(header_name, header_value);
            }
        }
        Ok(self)
    }

    /// Set the raw request body
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set a JSON body and its content type
    ///
    /// Object keys are emitted in sorted order so equal inputs always encode
    /// to equal bytes.
    pub fn json<T: Serialize + ?Sized>(mut self, data: &T) -> Result<Self> {
        self.body = Some(encode_json(data)?);
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MEDIA_TYPE));
        Ok(self)
    }

    /// Get a header value as string
    pub fn header_str(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Content type, if one was set
    pub fn content_type(&self) -> Option<&str> {
        self.header_str(CONTENT_TYPE.as_str())
    }

    /// Decode the body as JSON
    pub fn body_json<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        self.body
            .as_ref()
            .map(|b| serde_json::from_slice(b).map_err(Error::from))
            .transpose()
    }
}

/// Canonical JSON encoding of a structured body
pub fn encode_json<T: Serialize + ?Sized>(data: &T) -> Result<Bytes> {
    // Going through Value sorts map keys.
    let value = serde_json::to_value(data)?;
    Ok(Bytes::from(serde_json::to_vec(&value)?))
}

/// Build a wire request
///
/// Headers are copied verbatim. A body, when given, is encoded as JSON and
/// `Content-Type: application/json` is set; without a body no content type
/// is injected. No I/O happens here.
pub fn build_request<T: Serialize + ?Sized>(
    url: Url,
    method: HttpMethod,
    headers: Option<&HashMap<String, String>>,
    body: Option<&T>,
) -> Result<WireRequest> {
    let mut request = WireRequest::new(method, url);

    if let Some(headers) = headers {
        request = request.headers(headers)?;
    }

    if let Some(body) = body {
        request = request.json(body)?;
    }

    Ok(request)
}

/// Append a relative path to a base location as path segments
///
/// Leading, trailing and repeated slashes on either side never produce
/// empty segments.
pub fn append_path(base: &Url, path: &str) -> Result<Url> {
    let mut url = base.clone();
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| Error::InvalidUrl(format!("{} cannot be a base", base)))?;
        segments
            .pop_if_empty()
            .extend(path.split('/').filter(|s| !s.is_empty()));
    }
    Ok(url)
}
