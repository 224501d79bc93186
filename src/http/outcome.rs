// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Normalized request outcome

use bytes::Bytes;
use serde::de::DeserializeOwned;

use super::response::{RawResponse, ResponseMeta};
use crate::error::{Error, Result};

/// Result of one request: either a body with response metadata, or an error
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The stack delivered a well-formed HTTP response
    Success { body: Bytes, response: ResponseMeta },
    /// The request failed or produced no usable response
    Failure(Error),
}

impl Outcome {
    /// Create a success outcome
    pub fn success(body: impl Into<Bytes>, response: ResponseMeta) -> Self {
        Outcome::Success {
            body: body.into(),
            response,
        }
    }

    /// Create a failure outcome
    pub fn failure(error: Error) -> Self {
        Outcome::Failure(error)
    }

    /// Normalize the three independent signals a network stack reports
    ///
    /// An error always wins, even when a response or body came with it. A
    /// missing or non-HTTP response is `UnexpectedRepresentation`. An HTTP
    /// response without body bytes is a success with an empty body.
    pub fn classify(
        error: Option<Error>,
        response: Option<RawResponse>,
        body: Option<Bytes>,
    ) -> Self {
        if let Some(error) = error {
            return Outcome::Failure(error);
        }

        match response {
            Some(RawResponse::Http(response)) => Outcome::Success {
                body: body.unwrap_or_default(),
                response,
            },
            Some(RawResponse::NonHttp { .. }) | None => {
                Outcome::Failure(Error::UnexpectedRepresentation)
            }
        }
    }

    /// Check if this is a success
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Check if this is a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Success body
    pub fn body(&self) -> Option<&Bytes> {
        match self {
            Outcome::Success { body, .. } => Some(body),
            Outcome::Failure(_) => None,
        }
    }

    /// Success response metadata
    pub fn response(&self) -> Option<&ResponseMeta> {
        match self {
            Outcome::Success { response, .. } => Some(response),
            Outcome::Failure(_) => None,
        }
    }

    /// Failure error
    pub fn error(&self) -> Option<&Error> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Convert into a standard result
    pub fn into_result(self) -> Result<(Bytes, ResponseMeta)> {
        match self {
            Outcome::Success { body, response } => Ok((body, response)),
            Outcome::Failure(error) => Err(error),
        }
    }

    /// Success body as text, lossily decoded
    pub fn text(&self) -> Option<String> {
        self.body().map(|b| String::from_utf8_lossy(b).into_owned())
    }

    /// Decode a success body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        match self {
            Outcome::Success { body, .. } => serde_json::from_slice(body).map_err(Error::from),
            Outcome::Failure(error) => Err(error.clone()),
        }
    }
}

impl PartialEq for Outcome {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Outcome::Success { body, response },
                Outcome::Success {
                    body: other_body,
                    response: other_response,
                },
            ) => body == other_body && response == other_response,
            (Outcome::Failure(a), Outcome::Failure(b)) => a.same_classification(b),
            _ => false,
        }
    }
}

impl From<Result<(Bytes, ResponseMeta)>> for Outcome {
    fn from(result: Result<(Bytes, ResponseMeta)>) -> Self {
        match result {
            Ok((body, response)) => Outcome::Success { body, response },
            Err(error) => Outcome::Failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use url::Url;

    fn any_url() -> Url {
        Url::parse("https://any-url.com").unwrap()
    }

    fn any_error() -> Error {
        Error::transport("test", 1, "any error")
    }

    fn any_data() -> Bytes {
        Bytes::from_static(b"Any data")
    }

    fn http_response() -> RawResponse {
        RawResponse::Http(ResponseMeta::new(any_url(), StatusCode::OK))
    }

    fn non_http_response() -> RawResponse {
        RawResponse::NonHttp { url: any_url() }
    }

    #[test]
    fn test_classification_is_total() {
        let errors = [None, Some(any_error())];
        let responses = [None, Some(http_response()), Some(non_http_response())];
        let bodies = [None, Some(any_data())];

        for error in &errors {
            for response in &responses {
                for body in &bodies {
                    let outcome = Outcome::classify(error.clone(), response.clone(), body.clone());

                    let expect_success =
                        error.is_none() && matches!(response, Some(RawResponse::Http(_)));
                    assert_eq!(
                        outcome.is_success(),
                        expect_success,
                        "error={:?} response={:?} body={:?}",
                        error.is_some(),
                        response,
                        body
                    );

                    if error.is_some() {
                        assert_eq!(outcome, Outcome::Failure(any_error()));
                    } else if !expect_success {
                        assert_eq!(outcome, Outcome::Failure(Error::UnexpectedRepresentation));
                    }
                }
            }
        }
    }

    #[test]
    fn test_empty_body_success() {
        let outcome = Outcome::classify(None, Some(http_response()), None);
        assert_eq!(outcome.body(), Some(&Bytes::new()));
        assert_eq!(outcome.response().map(|r| r.status_code()), Some(200));
    }

    #[test]
    fn test_error_wins_over_response_and_body() {
        let outcome = Outcome::classify(Some(any_error()), Some(http_response()), Some(any_data()));
        assert!(outcome.error().map(Error::is_transport).unwrap_or(false));
    }

    #[test]
    fn test_equality() {
        let meta = ResponseMeta::new(any_url(), StatusCode::OK);

        assert_eq!(
            Outcome::failure(Error::transport("test", 1, "a")),
            Outcome::failure(Error::transport("test", 1, "b"))
        );
        assert_ne!(
            Outcome::failure(Error::transport("test", 1, "a")),
            Outcome::failure(Error::transport("test", 2, "a"))
        );
        assert_eq!(
            Outcome::success(any_data(), meta.clone()),
            Outcome::success(any_data(), meta.clone())
        );
        assert_ne!(
            Outcome::success(any_data(), meta.clone()),
            Outcome::success(Bytes::new(), meta.clone())
        );
        assert_ne!(
            Outcome::success(any_data(), meta.clone()),
            Outcome::success(any_data(), ResponseMeta::new(any_url(), StatusCode::CREATED))
        );
        assert_ne!(Outcome::success(any_data(), meta), Outcome::failure(any_error()));
    }

    #[test]
    fn test_json_body() {
        let outcome = Outcome::success(
            Bytes::from_static(br#"{"id":1}"#),
            ResponseMeta::new(any_url(), StatusCode::OK),
        );
        let value: serde_json::Value = outcome.json().unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(outcome.text().as_deref(), Some(r#"{"id":1}"#));

        let failed = Outcome::failure(Error::UnexpectedRepresentation);
        assert!(failed.json::<serde_json::Value>().is_err());
        assert!(failed.text().is_none());
    }
}
