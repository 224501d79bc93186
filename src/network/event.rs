// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Recorded invocation types

use std::collections::HashMap;
use std::time::SystemTime;

use serde::Serialize;

use crate::http::{HttpMethod, WireRequest};

/// How the harness handled an intercepted request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Disposition {
    /// Handed to the request observer; no outcome was produced
    Observed,
    /// Resolved from the stub script
    Scripted,
    /// No script and no observer; resolved as an empty exchange
    Unscripted,
}

/// One request seen by the interception harness
#[derive(Debug, Clone, Serialize)]
pub struct RecordedRequest {
    /// Position in the scenario, starting at 1
    pub sequence: u64,
    /// When the request was intercepted
    pub timestamp: SystemTime,
    /// How it was handled
    pub disposition: Disposition,
    /// Request method
    pub method: HttpMethod,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Request body, lossily decoded
    pub body: Option<String>,
}

impl RecordedRequest {
    pub(crate) fn new(sequence: u64, disposition: Disposition, request: &WireRequest) -> Self {
        Self {
            sequence,
            timestamp: SystemTime::now(),
            disposition,
            method: request.method,
            url: request.url.to_string(),
            headers: request
                .headers
                .iter()
                .map(|(k, v)| (k.to_string(), String::from_utf8_lossy(v.as_bytes()).into_owned()))
                .collect(),
            body: request
                .body
                .as_ref()
                .map(|b| String::from_utf8_lossy(b).into_owned()),
        }
    }

    /// Get a header value
    pub fn header(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.headers.get(&name).map(String::as_str)
    }
}
