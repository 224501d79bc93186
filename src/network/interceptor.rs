// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Interception harness for deterministic request capture and scripting

use std::future::Future;
use std::sync::Arc;

use bytes::Bytes;
use lazy_static::lazy_static;
use parking_lot::{Condvar, Mutex, RwLock};
use tokio::sync::oneshot;
use tracing::{debug, trace, warn};

use super::event::{Disposition, RecordedRequest};
use crate::error::Error;
use crate::http::{Outcome, RawResponse, WireRequest};
use crate::transport::{channel, PendingOutcome, Transport};

lazy_static! {
    /// Transport that `HttpClient` routes to instead of the network
    static ref INSTALLED: RwLock<Option<Arc<dyn Transport>>> = RwLock::new(None);

    /// Whether a harness scenario is running
    static ref SCENARIO_RUNNING: Mutex<bool> = Mutex::new(false);
    static ref SCENARIO_ENDED: Condvar = Condvar::new();
}

/// Transport currently installed by a started harness
pub(crate) fn installed_interceptor() -> Option<Arc<dyn Transport>> {
    INSTALLED.read().clone()
}

/// Wait until no harness scenario is running and keep others out
pub(crate) fn scenario_guard() -> ScenarioGuard {
    let mut running = SCENARIO_RUNNING.lock();
    while *running {
        SCENARIO_ENDED.wait(&mut running);
    }
    *running = true;
    ScenarioGuard { _private: () }
}

/// Exclusive claim on the process-wide harness slot
pub(crate) struct ScenarioGuard {
    _private: (),
}

impl Drop for ScenarioGuard {
    fn drop(&mut self) {
        *SCENARIO_RUNNING.lock() = false;
        SCENARIO_ENDED.notify_one();
    }
}

/// Observer receiving an intercepted request
pub type RequestObserver = Box<dyn FnOnce(WireRequest) + Send>;

/// Scripted reply: the three signals a network stack reports
#[derive(Debug, Clone, Default)]
struct StubScript {
    error: Option<Error>,
    response: Option<RawResponse>,
    body: Option<Bytes>,
}

#[derive(Default)]
struct HarnessState {
    script: Option<StubScript>,
    observer: Option<RequestObserver>,
    recorded: Vec<RecordedRequest>,
}

/// Shared state; this is what gets installed
#[derive(Default)]
struct HarnessTransport {
    state: Mutex<HarnessState>,
}

impl HarnessTransport {
    fn reset(&self) {
        *self.state.lock() = HarnessState::default();
    }
}

impl Transport for HarnessTransport {
    fn request(&self, request: WireRequest) -> PendingOutcome {
        let mut state = self.state.lock();
        let sequence = state.recorded.len() as u64 + 1;

        if let Some(observer) = state.observer.take() {
            state
                .recorded
                .push(RecordedRequest::new(sequence, Disposition::Observed, &request));
            drop(state);

            trace!(sequence, method = %request.method, url = %request.url, "Observed request");
            observer(request);

            // Observed requests are withdrawn without an outcome.
            let (_, pending) = channel();
            return pending;
        }

        let (disposition, script) = match state.script.clone() {
            Some(script) => (Disposition::Scripted, script),
            None => (Disposition::Unscripted, StubScript::default()),
        };
        state
            .recorded
            .push(RecordedRequest::new(sequence, disposition, &request));
        drop(state);

        trace!(
            sequence,
            method = %request.method,
            url = %request.url,
            disposition = ?disposition,
            "Resolving intercepted request"
        );

        PendingOutcome::ready(Outcome::classify(script.error, script.response, script.body))
    }
}

/// Test stand-in for the network
///
/// While started, every request an [`HttpClient`](crate::http::HttpClient)
/// issues lands here instead of on the network. Each request is either
/// handed to a registered observer (and never resolved), or resolved from
/// the stub script using the same classification the real client applies.
/// Without script or observer a request resolves as if the stack returned
/// nothing at all, i.e. `Failure(UnexpectedRepresentation)`.
///
/// Observed requests are withdrawn: wait on them with
/// [`PendingOutcome::resolved`], which yields `None`, since awaiting the
/// pending value itself reports `Failure(Abandoned)`.
///
/// Only one harness can be started at a time in a process; `start` blocks
/// until any other scenario has stopped. Dropping a started harness stops it.
///
/// # Example
///
/// ```rust,no_run
/// use netlayer::network::InterceptionHarness;
/// use netlayer::http::{HttpClient, HttpMethod, ResponseMeta, RawResponse};
/// use netlayer::transport::Transport;
/// use url::Url;
///
/// # async fn run() -> netlayer::Result<()> {
/// let url = Url::parse("https://a.com/p")?;
/// let harness = InterceptionHarness::started();
/// harness.stub(
///     None,
///     Some(RawResponse::Http(ResponseMeta::from_status(url.clone(), 200)?)),
///     Some("hello".into()),
/// );
///
/// let outcome = HttpClient::new()?.send(url, HttpMethod::Get, None, None).await;
/// assert!(outcome.is_success());
/// # Ok(())
/// # }
/// ```
pub struct InterceptionHarness {
    transport: Arc<HarnessTransport>,
    scenario: Option<ScenarioGuard>,
}

impl InterceptionHarness {
    /// Create an inactive harness
    pub fn new() -> Self {
        Self {
            transport: Arc::new(HarnessTransport::default()),
            scenario: None,
        }
    }

    /// Create and start a harness
    pub fn started() -> Self {
        let mut harness = Self::new();
        harness.start();
        harness
    }

    /// Install as the transport behind `HttpClient` and clear leftover state
    pub fn start(&mut self) {
        if self.scenario.is_some() {
            return;
        }

        self.scenario = Some(scenario_guard());
        self.transport.reset();
        let installed: Arc<dyn Transport> = self.transport.clone();
        *INSTALLED.write() = Some(installed);

        debug!("Interception harness started");
    }

    /// Uninstall and clear script, observer and request log
    pub fn stop(&mut self) {
        let Some(scenario) = self.scenario.take() else {
            return;
        };

        *INSTALLED.write() = None;
        self.transport.reset();
        drop(scenario);

        debug!("Interception harness stopped");
    }

    /// Check if the harness is started
    pub fn is_active(&self) -> bool {
        self.scenario.is_some()
    }

    /// Script the reply for subsequent requests
    ///
    /// The script stays in place until replaced or until the harness stops.
    pub fn stub(&self, error: Option<Error>, response: Option<RawResponse>, body: Option<Bytes>) {
        if !self.is_active() {
            warn!("Ignoring stub on an interception harness that is not started");
            return;
        }

        debug!(
            error = error.is_some(),
            response = response.is_some(),
            body = body.is_some(),
            "Stubbed intercepted requests"
        );
        self.transport.state.lock().script = Some(StubScript {
            error,
            response,
            body,
        });
    }

    /// Hand the next intercepted request to `observer` instead of resolving it
    pub fn observe_requests<F>(&self, observer: F)
    where
        F: FnOnce(WireRequest) + Send + 'static,
    {
        if !self.is_active() {
            warn!("Ignoring observer on an interception harness that is not started");
            return;
        }

        self.transport.state.lock().observer = Some(Box::new(observer));
    }

    /// Wait for the next intercepted request
    ///
    /// Resolves to `None` if the harness stops first.
    pub fn capture_next_request(&self) -> impl Future<Output = Option<WireRequest>> + Send + 'static {
        let (sender, receiver) = oneshot::channel();
        self.observe_requests(move |request| {
            let _ = sender.send(request);
        });
        async move { receiver.await.ok() }
    }

    /// Requests seen since the harness started
    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.transport.state.lock().recorded.clone()
    }

    /// Number of requests seen since the harness started
    pub fn request_count(&self) -> usize {
        self.transport.state.lock().recorded.len()
    }

    /// Export the request log as JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.recorded())
    }
}

impl Default for InterceptionHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InterceptionHarness {
    fn drop(&mut self) {
        self.stop();
    }
}

impl Transport for InterceptionHarness {
    fn request(&self, request: WireRequest) -> PendingOutcome {
        self.transport.request(request)
    }
}
