// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Recording transport resolved by hand

use parking_lot::Mutex;

use crate::http::{Outcome, WireRequest};
use crate::transport::{channel, Completion, PendingOutcome, Transport};

/// Transport double that records requests and leaves them pending
///
/// Each request stays unresolved until the test calls [`complete`].
///
/// [`complete`]: TransportSpy::complete
#[derive(Default)]
pub struct TransportSpy {
    messages: Mutex<Vec<(WireRequest, Option<Completion>)>>,
}

impl TransportSpy {
    /// Create an empty spy
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<WireRequest> {
        self.messages
            .lock()
            .iter()
            .map(|(request, _)| request.clone())
            .collect()
    }

    /// Number of requests received
    pub fn count(&self) -> usize {
        self.messages.lock().len()
    }

    /// Resolve the request at `index`
    ///
    /// Returns false if there is no such request or it was already resolved.
    pub fn complete(&self, index: usize, outcome: Outcome) -> bool {
        let completion = self
            .messages
            .lock()
            .get_mut(index)
            .and_then(|(_, completion)| completion.take());

        match completion {
            Some(completion) => completion.complete(outcome),
            None => false,
        }
    }

    /// Drop the completion at `index` without an outcome
    pub fn abandon(&self, index: usize) -> bool {
        self.messages
            .lock()
            .get_mut(index)
            .and_then(|(_, completion)| completion.take())
            .is_some()
    }
}

impl Transport for TransportSpy {
    fn request(&self, request: WireRequest) -> PendingOutcome {
        let (completion, pending) = channel();
        self.messages.lock().push((request, Some(completion)));
        pending
    }
}
