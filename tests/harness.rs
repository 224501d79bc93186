// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HttpClient behavior against the interception harness
//!
//! Every test starts its own harness; the harness serializes scenarios, so
//! tests in this file never see each other's scripts.

use std::collections::HashMap;

use bytes::Bytes;
use netlayer::error::NETLAYER_DOMAIN;
use netlayer::{
    Disposition, Error, HttpClient, HttpMethod, InterceptionHarness, Outcome, RawResponse,
    ResponseMeta, Transport, WireRequest,
};
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

fn non_http_response() -> RawResponse {
    RawResponse::NonHttp { url: any_url() }
}

fn any_http_response() -> RawResponse {
    RawResponse::Http(ResponseMeta::new(any_url(), StatusCode::OK))
}

fn make_sut() -> HttpClient {
    HttpClient::new().unwrap()
}

async fn result_for(
    error: Option<Error>,
    response: Option<RawResponse>,
    body: Option<Bytes>,
) -> Outcome {
    let harness = InterceptionHarness::started();
    harness.stub(error, response, body);

    make_sut().send(any_url(), HttpMethod::Get, None, None).await
}

async fn request_for(
    url: Url,
    method: HttpMethod,
    body: Option<serde_json::Value>,
    headers: Option<HashMap<String, String>>,
) -> WireRequest {
    let harness = InterceptionHarness::started();
    let observed = harness.capture_next_request();

    let _pending = make_sut().send(url, method, headers.as_ref(), body.as_ref());

    observed.await.expect("request was not observed")
}

#[tokio::test]
async fn fails_on_request_error() {
    let outcome = result_for(Some(any_error()), None, None).await;

    let error = outcome.error().expect("expected failure");
    assert_eq!(error.domain(), "test");
    assert_eq!(error.code(), 1);
}

#[tokio::test]
async fn fails_on_all_invalid_representation_cases() {
    let cases = [
        (None, None, None),
        (None, Some(non_http_response()), None),
        (Some(any_data()), None, None),
        (Some(any_data()), None, Some(any_error())),
        (None, Some(non_http_response()), Some(any_error())),
        (None, Some(any_http_response()), Some(any_error())),
        (Some(any_data()), Some(non_http_response()), Some(any_error())),
        (Some(any_data()), Some(any_http_response()), Some(any_error())),
        (Some(any_data()), Some(non_http_response()), None),
    ];

    for (body, response, error) in cases {
        let had_error = error.is_some();
        let outcome = result_for(error, response, body).await;

        assert!(outcome.is_failure());
        if had_error {
            assert_eq!(outcome, Outcome::failure(any_error()));
        } else {
            assert_eq!(outcome, Outcome::failure(Error::UnexpectedRepresentation));
        }
    }
}

#[tokio::test]
async fn succeeds_on_http_response_with_data() {
    let outcome = result_for(None, Some(any_http_response()), Some(any_data())).await;

    let (body, response) = outcome.into_result().unwrap();
    assert_eq!(body, any_data());
    assert_eq!(response.url, any_url());
    assert_eq!(response.status_code(), 200);
}

#[tokio::test]
async fn succeeds_with_empty_data_on_http_response_without_data() {
    let outcome = result_for(None, Some(any_http_response()), None).await;

    let (body, response) = outcome.into_result().unwrap();
    assert!(body.is_empty());
    assert_eq!(response.url, any_url());
    assert_eq!(response.status_code(), 200);
}

#[tokio::test]
async fn unscripted_request_is_an_unexpected_representation() {
    let harness = InterceptionHarness::started();

    let outcome = make_sut().send(any_url(), HttpMethod::Get, None, None).await;

    let error = outcome.error().unwrap();
    assert_eq!(error.domain(), NETLAYER_DOMAIN);
    assert!(matches!(error, Error::UnexpectedRepresentation));
    assert_eq!(harness.recorded()[0].disposition, Disposition::Unscripted);
}

#[tokio::test]
async fn without_method_performs_get_request() {
    let request = request_for(any_url(), HttpMethod::default(), None, None).await;

    assert_eq!(request.url, any_url());
    assert_eq!(request.method.as_str(), "GET");
    assert!(request.headers.is_empty());
}

#[tokio::test]
async fn performs_request_with_each_method() {
    for method in [HttpMethod::Post, HttpMethod::Put, HttpMethod::Delete] {
        let request = request_for(any_url(), method, None, None).await;

        assert_eq!(request.url, any_url());
        assert_eq!(request.method, method);
        assert!(request.headers.is_empty());
        assert!(request.body.is_none());
    }
}

#[tokio::test]
async fn performs_request_with_headers() {
    let headers = HashMap::from([("new-header".to_string(), "new-header-value".to_string())]);

    let request = request_for(any_url(), HttpMethod::Get, None, Some(headers)).await;

    assert_eq!(request.headers.len(), 1);
    assert_eq!(request.header_str("new-header"), Some("new-header-value"));
}

#[tokio::test]
async fn performs_request_with_body() {
    let body = serde_json::json!({"body": "body-value"});
    let expected = serde_json::to_vec(&body).unwrap();

    let request = request_for(any_url(), HttpMethod::Post, Some(body), None).await;

    assert_eq!(request.body.as_deref(), Some(expected.as_slice()));
}

#[tokio::test]
async fn request_with_body_adds_content_type() {
    let headers = HashMap::from([("X".to_string(), "Y".to_string())]);
    let body = serde_json::json!({"body": "body-value"});

    let request = request_for(any_url(), HttpMethod::Post, Some(body), Some(headers)).await;

    assert_eq!(request.method.as_str(), "POST");
    assert_eq!(request.header_str("X"), Some("Y"));
    assert_eq!(request.header_str("Content-Type"), Some("application/json"));
}

#[tokio::test]
async fn observer_takes_precedence_over_script() {
    let harness = InterceptionHarness::started();
    harness.stub(None, Some(any_http_response()), Some(any_data()));
    let observed = harness.capture_next_request();

    let pending = make_sut().send(any_url(), HttpMethod::Get, None, None);

    assert!(observed.await.is_some());
    assert!(pending.resolved().await.is_none());
    assert_eq!(harness.recorded()[0].disposition, Disposition::Observed);
}

#[tokio::test]
async fn observer_is_one_shot() {
    let harness = InterceptionHarness::started();
    harness.stub(None, Some(any_http_response()), Some(any_data()));
    let observed = harness.capture_next_request();

    let _first = make_sut().send(any_url(), HttpMethod::Get, None, None);
    let second = make_sut().send(any_url(), HttpMethod::Get, None, None).await;

    assert!(observed.await.is_some());
    assert_eq!(second.body(), Some(&any_data()));
    let dispositions: Vec<_> = harness.recorded().iter().map(|r| r.disposition).collect();
    assert_eq!(dispositions, vec![Disposition::Observed, Disposition::Scripted]);
}

#[tokio::test]
async fn stop_clears_pending_observer() {
    let mut harness = InterceptionHarness::started();
    let observed = harness.capture_next_request();

    harness.stop();

    assert!(observed.await.is_none());
    assert_eq!(harness.request_count(), 0);
    assert!(!harness.is_active());
}

#[tokio::test]
async fn request_log_exports_json() {
    let harness = InterceptionHarness::started();
    let headers = HashMap::from([("x-trace".to_string(), "abc".to_string())]);

    let _ = make_sut()
        .send(any_url(), HttpMethod::Put, Some(&headers), None)
        .await;

    let exported: serde_json::Value = serde_json::from_str(&harness.to_json().unwrap()).unwrap();
    assert_eq!(exported[0]["sequence"], 1);
    assert_eq!(exported[0]["method"], "PUT");
    assert_eq!(exported[0]["headers"]["x-trace"], "abc");
}

#[tokio::test]
async fn execute_is_intercepted() {
    let harness = InterceptionHarness::started();
    harness.stub(None, Some(any_http_response()), Some(any_data()));
    let request = WireRequest::new(HttpMethod::Get, Url::parse("http://127.0.0.1:9/p").unwrap());

    let outcome = make_sut().execute(request).await;

    assert_eq!(outcome.body(), Some(&any_data()));
    assert_eq!(harness.request_count(), 1);
    assert_eq!(harness.recorded()[0].url, "http://127.0.0.1:9/p");
}

#[tokio::test]
async fn observed_request_awaited_directly_is_abandoned() {
    let harness = InterceptionHarness::started();
    let _observed = harness.capture_next_request();

    let outcome = make_sut().send(any_url(), HttpMethod::Get, None, None).await;

    assert_eq!(outcome, Outcome::failure(Error::Abandoned));
    assert_eq!(harness.recorded()[0].disposition, Disposition::Observed);
}
