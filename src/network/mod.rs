// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Test-side transports
//!
//! The interception harness replaces the network behind `HttpClient`; the
//! spy is a standalone transport for exercising callers in isolation.

mod event;
mod interceptor;
mod spy;

pub use event::{Disposition, RecordedRequest};
pub use interceptor::{InterceptionHarness, RequestObserver};
pub use spy::TransportSpy;

pub(crate) use interceptor::installed_interceptor;
#[cfg(test)]
pub(crate) use interceptor::scenario_guard;
