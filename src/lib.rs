// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # netlayer - Transport-Agnostic HTTP Client Layer
//!
//! A small layer between callers and a concrete HTTP stack.
//!
//! ## Features
//!
//! - Transport capability: one request in, exactly one outcome out
//! - Request builder: pure, deterministic wire requests with JSON bodies
//! - Outcome model: transport failure, malformed response and success kept apart
//! - Endpoint router: declarative targets dispatched over any transport
//! - Interception harness: script or observe requests without a network
//!
//! ## Example
//!
//! ```rust,no_run
//! use netlayer::{Endpoint, HttpClient, HttpMethod, Provider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = Provider::with_transport(HttpClient::new()?);
//!     let endpoint = Endpoint::parse("https://api.example.com", "users/1")?
//!         .with_method(HttpMethod::Get)
//!         .header("accept", "application/json");
//!
//!     let outcome = provider.request(&endpoint).await;
//!     match outcome.into_result() {
//!         Ok((body, response)) => println!("{} ({} bytes)", response.status, body.len()),
//!         Err(e) => eprintln!("request failed: {}", e),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod http;
pub mod network;
pub mod provider;
pub mod transport;

// Re-exports for convenience

// Errors
pub use error::{Error, Result};

// HTTP
pub use http::{
    append_path, build_request, HttpClient, HttpClientConfig, HttpMethod, Outcome, RawResponse,
    ResponseMeta, WireRequest,
};

// Transport
pub use transport::{Completion, PendingOutcome, Transport};

// Routing
pub use provider::{Endpoint, Provider, Target};

// Test-side transports
pub use network::{Disposition, InterceptionHarness, RecordedRequest, TransportSpy};

/// netlayer version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
