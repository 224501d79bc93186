// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Endpoint routing
//!
//! Turns a declarative [`Target`] into exactly one transport call and hands
//! the outcome back unchanged.

mod target;

pub use target::{Endpoint, Target};

use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::{debug, warn};

use crate::http::Outcome;
use crate::transport::{PendingOutcome, Transport};

/// Endpoint router over any transport
#[derive(Clone)]
pub struct Provider {
    transport: Arc<dyn Transport>,
}

impl Provider {
    /// Create a provider over a shared transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Create a provider that owns its transport
    pub fn with_transport<T: Transport + 'static>(transport: T) -> Self {
        Self::new(Arc::new(transport))
    }

    /// Get the transport
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Issue the request described by `target`
    ///
    /// A target that cannot be resolved into a wire request fails without
    /// reaching the transport. A request withdrawn by a harness observer has
    /// no outcome: `resolved()` yields `None`, while awaiting the pending
    /// value directly yields `Failure(Abandoned)`.
    pub fn request<T: Target + ?Sized>(&self, target: &T) -> PendingOutcome {
        match target.to_request() {
            Ok(request) => {
                debug!(method = %request.method, url = %request.url, "Dispatching request");
                self.transport.request(request)
            }
            Err(error) => {
                warn!(path = target.path(), error = %error, "Could not resolve target");
                PendingOutcome::ready(Outcome::Failure(error))
            }
        }
    }

    /// Issue the request and call `on_complete` with its outcome
    ///
    /// Returns immediately. The callback runs exactly once for every request
    /// that resolves, never before `dispatch` has returned. Requests withdrawn
    /// by the transport never invoke it.
    ///
    /// Outside a tokio runtime delivery runs on a detached thread, which stays
    /// blocked for as long as the transport keeps the request unresolved.
    pub fn dispatch<T, F>(&self, target: &T, on_complete: F)
    where
        T: Target + ?Sized,
        F: FnOnce(Outcome) + Send + 'static,
    {
        let pending = self.request(target);
        let deliver = async move {
            match pending.resolved().await {
                Some(outcome) => on_complete(outcome),
                None => debug!("Request withdrawn without an outcome"),
            }
        };

        match Handle::try_current() {
            Ok(handle) => {
                handle.spawn(deliver);
            }
            Err(_) => {
                std::thread::spawn(move || futures::executor::block_on(deliver));
            }
        }
    }
}
