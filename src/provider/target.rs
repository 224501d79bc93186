// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Declarative endpoint descriptions

use std::collections::HashMap;

use serde::Serialize;
use url::Url;

use crate::error::{Error, Result};
use crate::http::{append_path, build_request, HttpMethod, WireRequest};

/// Description of one logical API call, independent of any transport
pub trait Target {
    /// Origin the path is resolved against
    fn base_url(&self) -> &Url;

    /// Path relative to the base URL
    fn path(&self) -> &str;

    /// Request method
    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    /// Request headers
    fn headers(&self) -> HashMap<String, String> {
        HashMap::new()
    }

    /// Structured request body
    fn body(&self) -> Option<&serde_json::Value> {
        None
    }

    /// Absolute URL of the call
    fn url(&self) -> Result<Url> {
        append_path(self.base_url(), self.path())
    }

    /// Resolve into a wire request
    fn to_request(&self) -> Result<WireRequest> {
        let headers = self.headers();
        build_request(self.url()?, self.method(), Some(&headers), self.body())
    }
}

/// Owned [`Target`] built by the caller
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    base_url: Url,
    path: String,
    method: HttpMethod,
    headers: HashMap<String, String>,
    body: Option<serde_json::Value>,
}

impl Endpoint {
    /// Create a GET endpoint
    pub fn new(base_url: Url, path: impl Into<String>) -> Self {
        Self {
            base_url,
            path: path.into(),
            method: HttpMethod::Get,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Create a GET endpoint from a base URL string
    pub fn parse(base_url: impl AsRef<str>, path: impl Into<String>) -> Result<Self> {
        Ok(Self::new(Url::parse(base_url.as_ref())?, path))
    }

    /// Set the method
    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Set a header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set multiple headers
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Set a structured body
    pub fn json<T: Serialize + ?Sized>(mut self, data: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(data).map_err(Error::from)?);
        Ok(self)
    }
}

impl Target for Endpoint {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn method(&self) -> HttpMethod {
        self.method
    }

    fn headers(&self) -> HashMap<String, String> {
        self.headers.clone()
    }

    fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }
}
