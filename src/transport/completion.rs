// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Single-resolution completion cell

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use crate::error::Error;
use crate::http::Outcome;

/// Create a linked completion/pending pair
pub fn channel() -> (Completion, PendingOutcome) {
    let (sender, receiver) = oneshot::channel();
    (Completion { sender }, PendingOutcome { receiver })
}

/// Write side of a request outcome
///
/// `complete` consumes the handle, so an outcome can be delivered at most
/// once. Dropping it unresolved abandons the request.
#[derive(Debug)]
pub struct Completion {
    sender: oneshot::Sender<Outcome>,
}

impl Completion {
    /// Deliver the outcome
    ///
    /// Returns false if nobody is waiting for it anymore.
    pub fn complete(self, outcome: Outcome) -> bool {
        self.sender.send(outcome).is_ok()
    }

    /// Check if the waiting side went away
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

/// Read side of a request outcome
///
/// Resolves to the delivered outcome, or to `Failure(Abandoned)` if the
/// completion was dropped without one.
#[derive(Debug)]
#[must_use = "an outcome is only observed by awaiting it"]
pub struct PendingOutcome {
    receiver: oneshot::Receiver<Outcome>,
}

impl PendingOutcome {
    /// An already resolved outcome
    pub fn ready(outcome: Outcome) -> Self {
        let (completion, pending) = channel();
        completion.complete(outcome);
        pending
    }

    /// Wait for the outcome, `None` if the request was abandoned
    pub async fn resolved(self) -> Option<Outcome> {
        self.receiver.await.ok()
    }
}

impl Future for PendingOutcome {
    type Output = Outcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|result| result.unwrap_or(Outcome::Failure(Error::Abandoned)))
    }
}
