// Dispatcher tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use httptest::{all_of, matchers::*, responders::*, Expectation, Server};
use serde::Deserialize;
use serde_json::json;

use super::*;
use crate::config::FALLBACK_ERROR_MESSAGE;
use crate::error_handling::{FailureKind, TransportError};

/// Transport that replays one canned outcome and records what it was asked to send.
struct StubTransport {
    outcome: Result<TransportResponse, TransportError>,
    calls: AtomicUsize,
    seen: Mutex<Vec<RequestDescriptor>>,
}

impl StubTransport {
    fn responding(status: u16, body: serde_json::Value) -> Self {
        Self::with_outcome(Ok(TransportResponse {
            status,
            body: body.to_string().into_bytes(),
        }))
    }

    fn raw(status: u16, body: &str) -> Self {
        Self::with_outcome(Ok(TransportResponse {
            status,
            body: body.as_bytes().to_vec(),
        }))
    }

    fn failing(kind: FailureKind) -> Self {
        Self::with_outcome(Err(TransportError::new(kind, "connection refused")))
    }

    fn with_outcome(outcome: Result<TransportResponse, TransportError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last_sent(&self) -> RequestDescriptor {
        self.seen
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("nothing was sent")
    }
}

impl Transport for StubTransport {
    async fn send(
        &self,
        descriptor: &RequestDescriptor,
    ) -> Result<TransportResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(descriptor.clone());
        self.outcome.clone()
    }
}

#[derive(Debug, Deserialize, PartialEq)]
struct User {
    id: u32,
    name: String,
}

fn users_url() -> RequestDescriptor {
    RequestDescriptor::get("https://api.example.com/users/1")
}

#[tokio::test]
async fn test_success_invokes_only_on_success() {
    let transport = StubTransport::responding(
        200,
        json!({"data": {"id": 1, "name": "John Doe"}, "message": "ok"}),
    );
    let mut successes = Vec::new();
    let mut errors = Vec::new();

    let result = dispatch(
        &transport,
        users_url(),
        |user: User| successes.push(user),
        |error| errors.push(error),
        None,
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(
        successes,
        vec![User {
            id: 1,
            name: "John Doe".to_string()
        }]
    );
    assert!(errors.is_empty());
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_not_found_invokes_only_on_error() {
    let transport = StubTransport::responding(404, json!({"message": "not found"}));
    let mut successes: Vec<User> = Vec::new();
    let mut errors = Vec::new();

    let result = dispatch(
        &transport,
        users_url(),
        |user| successes.push(user),
        |error| errors.push(error),
        None,
    )
    .await;

    assert!(result.is_ok());
    assert!(successes.is_empty());
    assert_eq!(
        errors,
        vec![ApiError {
            status: 404,
            message: "not found".to_string()
        }]
    );
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_error_response_without_message_uses_fallback() {
    let transport = StubTransport::responding(500, json!({"data": null}));

    let err = request::<User, _>(&transport, users_url(), None)
        .await
        .unwrap_err();

    match err {
        RequestError::Api(error) => {
            assert_eq!(error.status, 500);
            assert_eq!(error.message, FALLBACK_ERROR_MESSAGE);
        }
        other => panic!("expected an API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_error_response_with_html_body_keeps_status() {
    let transport = StubTransport::raw(503, "<h1>Service Unavailable</h1>");

    let err = request::<User, _>(&transport, users_url(), None)
        .await
        .unwrap_err();

    match err {
        RequestError::Api(error) => {
            assert_eq!(error.status, 503);
            assert_eq!(error.message, FALLBACK_ERROR_MESSAGE);
        }
        other => panic!("expected an API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_no_response_reports_500_fallback() {
    for kind in [FailureKind::Connect, FailureKind::Timeout, FailureKind::Builder] {
        let transport = StubTransport::failing(kind);
        let mut successes: Vec<User> = Vec::new();
        let mut errors = Vec::new();

        dispatch(
            &transport,
            users_url(),
            |user| successes.push(user),
            |error| errors.push(error),
            None,
        )
        .await
        .expect("transport failures are delivered through on_error");

        assert!(successes.is_empty());
        assert_eq!(errors, vec![ApiError::fallback()], "kind {:?}", kind);
        assert_eq!(errors[0].status, 500);
        assert_eq!(transport.calls(), 1);
    }
}

#[tokio::test]
async fn test_undecodable_success_body_propagates_without_callbacks() {
    let transport = StubTransport::raw(200, "definitely not json");
    let mut successes: Vec<User> = Vec::new();
    let mut errors = Vec::new();

    let result = dispatch(
        &transport,
        users_url(),
        |user| successes.push(user),
        |error| errors.push(error),
        None,
    )
    .await;

    let err = result.expect_err("decode failures are returned to the caller");
    assert_eq!(err.status, 200);
    assert!(successes.is_empty());
    assert!(errors.is_empty());
}

#[tokio::test]
async fn test_success_body_with_wrong_payload_shape_is_decode_error() {
    let transport = StubTransport::responding(200, json!({"data": "a string", "message": "ok"}));

    let err = request::<User, _>(&transport, users_url(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, RequestError::Decode(_)));
}

#[tokio::test]
async fn test_post_body_replaces_descriptor_body() {
    let transport = StubTransport::responding(201, json!({"data": 7, "message": "created"}));
    let mut fields = PostParams::new();
    fields.insert("name".to_string(), json!("John Doe"));
    fields.insert("age".to_string(), json!(30));

    let descriptor = RequestDescriptor::post("https://api.example.com/users")
        .header("authorization", "Bearer token")
        .json(json!({"ignored": true}));

    let id: u32 = request(&transport, descriptor, Some(fields)).await.unwrap();
    assert_eq!(id, 7);

    let sent = transport.last_sent();
    assert_eq!(sent.body, Some(json!({"name": "John Doe", "age": 30})));
    assert_eq!(
        sent.headers,
        vec![("authorization".to_string(), "Bearer token".to_string())]
    );
}

#[tokio::test]
async fn test_descriptor_unchanged_without_post_body() {
    let transport = StubTransport::responding(200, json!({"data": [], "message": "ok"}));
    let descriptor = RequestDescriptor::put("https://api.example.com/tags")
        .query("force", "1")
        .json(json!({"tags": ["a"]}));

    let tags: Vec<String> = request(&transport, descriptor.clone(), None).await.unwrap();
    assert!(tags.is_empty());
    assert_eq!(transport.last_sent(), descriptor);
}

#[tokio::test]
async fn test_reqwest_transport_success_round_trip() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/users"),
            request::headers(contains(("x-trace-id", "abc123"))),
            request::body(json_decoded(eq(json!({"name": "John Doe"})))),
        ])
        .respond_with(json_encoded(
            json!({"data": {"id": 42, "name": "John Doe"}, "message": "created"}),
        )),
    );

    let transport = ReqwestTransport::from_config(&crate::Config::default()).unwrap();
    let mut fields = PostParams::new();
    fields.insert("name".to_string(), json!("John Doe"));
    let descriptor =
        RequestDescriptor::post(server.url("/users").to_string()).header("x-trace-id", "abc123");

    let user: User = request(&transport, descriptor, Some(fields)).await.unwrap();
    assert_eq!(
        user,
        User {
            id: 42,
            name: "John Doe".to_string()
        }
    );
}

#[tokio::test]
async fn test_reqwest_transport_query_parameters() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/search"),
            request::query(url_decoded(contains(("q", "rust")))),
        ])
        .respond_with(json_encoded(json!({"data": ["a", "b"], "message": "ok"}))),
    );

    let transport = ReqwestTransport::from_config(&crate::Config::default()).unwrap();
    let descriptor = RequestDescriptor::get(server.url("/search").to_string()).query("q", "rust");

    let hits: Vec<String> = request(&transport, descriptor, None).await.unwrap();
    assert_eq!(hits, vec!["a".to_string(), "b".to_string()]);
}

#[tokio::test]
async fn test_reqwest_transport_error_response() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/users/9")).respond_with(
            status_code(404)
                .insert_header("content-type", "application/json")
                .body(r#"{"message": "not found"}"#),
        ),
    );

    let transport = ReqwestTransport::from_config(&crate::Config::default()).unwrap();
    let descriptor = RequestDescriptor::get(server.url("/users/9").to_string());

    let mut errors = Vec::new();
    dispatch::<User, _, _, _>(
        &transport,
        descriptor,
        |_| panic!("on_success must not run for a 404"),
        |error| errors.push(error),
        None,
    )
    .await
    .unwrap();

    assert_eq!(
        errors,
        vec![ApiError {
            status: 404,
            message: "not found".to_string()
        }]
    );
}

#[tokio::test]
async fn test_reqwest_transport_connection_refused() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let transport = ReqwestTransport::from_config(&crate::Config::default()).unwrap();
    let descriptor = RequestDescriptor::get(format!("http://{}/users", addr));

    let err = request::<User, _>(&transport, descriptor, None)
        .await
        .unwrap_err();
    match err {
        RequestError::Api(error) => assert_eq!(error, ApiError::fallback()),
        other => panic!("expected an API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_reqwest_transport_invalid_url_is_fallback() {
    let transport = ReqwestTransport::new(Arc::new(reqwest::Client::new()));

    let err = request::<User, _>(&transport, RequestDescriptor::get("::not a url::"), None)
        .await
        .unwrap_err();
    assert!(matches!(err, RequestError::Api(ref e) if e.status == 500));
}
