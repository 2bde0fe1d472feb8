mod common;

use std::time::Duration;

use customer_portal::{
    client::{CustomerApi, HttpCustomerApi, SubmissionError},
    schema,
};
use serde_json::json;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn success_returns_backend_body() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/customers"))
        .and(header("x-user", "portal_user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "sap_id": "0010004711" })))
        .expect(1)
        .mount(&backend)
        .await;

    let api = HttpCustomerApi::new(format!("{}/api/", backend.uri())).unwrap();
    let record = schema::validate(&common::valid_draft()).unwrap();

    let body = api.create_customer(&record).await.unwrap();
    assert_eq!(body, json!({ "sap_id": "0010004711" }));
}

#[tokio::test]
async fn rejection_without_error_field_uses_status_text() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&backend)
        .await;

    let api = HttpCustomerApi::new(backend.uri()).unwrap();
    let record = schema::validate(&common::valid_draft()).unwrap();

    let err = api.create_customer(&record).await.unwrap_err();
    assert!(matches!(err, SubmissionError::Rejected { message: None, .. }));
    assert_eq!(err.to_string(), "Request failed with status code 500");
}

#[tokio::test]
async fn slow_backend_times_out() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_delay(Duration::from_secs(2)))
        .mount(&backend)
        .await;

    let api = HttpCustomerApi::with_timeout(backend.uri(), Duration::from_millis(100)).unwrap();
    let record = schema::validate(&common::valid_draft()).unwrap();

    let err = api.create_customer(&record).await.unwrap_err();
    assert!(matches!(err, SubmissionError::Timeout(_)), "got {err:?}");
    assert_eq!(err.to_string(), "timeout of 100ms exceeded");
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpCustomerApi::new(format!("http://{}", addr)).unwrap();
    let record = schema::validate(&common::valid_draft()).unwrap();

    let err = api.create_customer(&record).await.unwrap_err();
    assert!(matches!(err, SubmissionError::Transport(_)), "got {err:?}");
    assert!(!err.to_string().is_empty());
}
