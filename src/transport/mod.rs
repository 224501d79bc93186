// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Transport capability
//!
//! A transport performs one HTTP request and delivers exactly one
//! [`Outcome`]. Implementations hand back a [`PendingOutcome`] immediately
//! and resolve it later through the matching [`Completion`].

mod completion;

pub use completion::{channel, Completion, PendingOutcome};

use std::collections::HashMap;
use std::sync::Arc;

use url::Url;

use crate::http::{build_request, HttpMethod, Outcome, WireRequest};

/// Perform one HTTP request, deliver one outcome
pub trait Transport: Send + Sync {
    /// Start the request and return its pending outcome without blocking
    fn request(&self, request: WireRequest) -> PendingOutcome;

    /// Build a wire request from its parts and start it
    ///
    /// A request that cannot be built resolves to a failure without reaching
    /// the transport.
    fn send(
        &self,
        url: Url,
        method: HttpMethod,
        headers: Option<&HashMap<String, String>>,
        body: Option<&serde_json::Value>,
    ) -> PendingOutcome {
        match build_request(url, method, headers, body) {
            Ok(request) => self.request(request),
            Err(error) => PendingOutcome::ready(Outcome::Failure(error)),
        }
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn request(&self, request: WireRequest) -> PendingOutcome {
        (**self).request(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn request(&self, request: WireRequest) -> PendingOutcome {
        (**self).request(request)
    }
}
