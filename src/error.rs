// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for netlayer
//!
//! Every error carries a classification (domain + code). Two failures are
//! considered the same outcome when their classifications match, regardless
//! of the human-readable message.

use thiserror::Error;

/// Result type alias for netlayer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Domain used for errors synthesized by this crate
pub const NETLAYER_DOMAIN: &str = "netlayer";

/// Domain used for errors reported by the reqwest transport
pub const REQWEST_DOMAIN: &str = "reqwest";

/// Stable codes for errors in [`NETLAYER_DOMAIN`]
pub mod codes {
    pub const UNEXPECTED_REPRESENTATION: i64 = 1;
    pub const ABANDONED: i64 = 2;
    pub const INVALID_URL: i64 = 3;
    pub const URL_PARSE: i64 = 4;
    pub const INVALID_HEADER: i64 = 5;
    pub const SERIALIZATION: i64 = 6;
    pub const CONFIG: i64 = 7;
}

/// Stable codes for errors in [`REQWEST_DOMAIN`]
pub mod reqwest_codes {
    pub const OTHER: i64 = 0;
    pub const TIMEOUT: i64 = 1;
    pub const CONNECT: i64 = 2;
    pub const REQUEST: i64 = 3;
    pub const BODY: i64 = 4;
    pub const DECODE: i64 = 5;
    pub const REDIRECT: i64 = 6;
    pub const BUILDER: i64 = 7;
    pub const STATUS: i64 = 8;
}

/// Main error type for netlayer
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// The underlying stack could not complete the request
    #[error("Transport error ({domain}:{code}): {message}")]
    Transport {
        domain: String,
        code: i64,
        message: String,
    },

    /// The stack returned without an error but without a usable HTTP response
    #[error("Unexpected response representation")]
    UnexpectedRepresentation,

    /// The completion handle was dropped before it resolved
    #[error("Request was abandoned before an outcome was delivered")]
    Abandoned,

    /// Base location cannot take path segments
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Header name or value cannot be put on the wire
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    /// Structured body could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a transport error with an explicit classification
    pub fn transport(domain: impl Into<String>, code: i64, message: impl Into<String>) -> Self {
        Error::Transport {
            domain: domain.into(),
            code,
            message: message.into(),
        }
    }

    /// Create an invalid header error
    pub fn invalid_header(name: impl Into<String>, reason: impl ToString) -> Self {
        Error::InvalidHeader {
            name: name.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Error domain
    pub fn domain(&self) -> &str {
        match self {
            Error::Transport { domain, .. } => domain,
            _ => NETLAYER_DOMAIN,
        }
    }

    /// Error code within its domain
    pub fn code(&self) -> i64 {
        match self {
            Error::Transport { code, .. } => *code,
            Error::UnexpectedRepresentation => codes::UNEXPECTED_REPRESENTATION,
            Error::Abandoned => codes::ABANDONED,
            Error::InvalidUrl(_) => codes::INVALID_URL,
            Error::Url(_) => codes::URL_PARSE,
            Error::InvalidHeader { .. } => codes::INVALID_HEADER,
            Error::Serialization(_) => codes::SERIALIZATION,
            Error::Config(_) => codes::CONFIG,
        }
    }

    /// True when both errors share domain and code
    pub fn same_classification(&self, other: &Error) -> bool {
        self.code() == other.code() && self.domain() == other.domain()
    }

    /// Check if this error came from the transport
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. })
    }

    /// Check if this is a transport timeout
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Error::Transport { domain, code, .. }
                if domain == REQWEST_DOMAIN && *code == reqwest_codes::TIMEOUT
        )
    }

    /// Check if this was raised while building the request, before any I/O
    pub fn is_request_construction(&self) -> bool {
        matches!(
            self,
            Error::InvalidUrl(_)
                | Error::Url(_)
                | Error::InvalidHeader { .. }
                | Error::Serialization(_)
        )
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let code = if err.is_timeout() {
            reqwest_codes::TIMEOUT
        } else if err.is_connect() {
            reqwest_codes::CONNECT
        } else if err.is_redirect() {
            reqwest_codes::REDIRECT
        } else if err.is_builder() {
            reqwest_codes::BUILDER
        } else if err.is_status() {
            reqwest_codes::STATUS
        } else if err.is_body() {
            reqwest_codes::BODY
        } else if err.is_decode() {
            reqwest_codes::DECODE
        } else if err.is_request() {
            reqwest_codes::REQUEST
        } else {
            reqwest_codes::OTHER
        };
        Error::transport(REQWEST_DOMAIN, code, err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
