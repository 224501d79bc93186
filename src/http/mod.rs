// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP layer for netlayer
//!
//! Wire requests and their builder, response metadata, the normalized
//! outcome type and the reqwest-backed transport.

mod client;
mod outcome;
mod request;
mod response;

pub use client::{HttpClient, HttpClientConfig};
pub use outcome::Outcome;
pub use request::{append_path, build_request, encode_json, HttpMethod, WireRequest};
pub use response::{RawResponse, ResponseMeta};

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("netlayer/", env!("CARGO_PKG_VERSION"));

/// Media type of encoded request bodies
pub const JSON_MEDIA_TYPE: &str = "application/json";
