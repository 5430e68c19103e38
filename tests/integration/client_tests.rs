use crate::common::{ORG_ID, TOKEN, create_test_client, test_config, two_task_page};
use assert_json_diff::assert_json_eq;
use log10_feedback::prelude::*;
use mockito::{Matcher, Server};
use reqwest::StatusCode;

#[tokio::test]
async fn test_create_sends_payload_and_headers() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/feedback")
        .match_header("x-log10-token", TOKEN)
        .match_header("x-log10-organization-id", ORG_ID)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "task_id": "T1",
            "json_values": {"score": 5},
            "completion_tags_selector": ["tagA", "tagB"],
            "comment": "nice",
            "organization_id": ORG_ID
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"f1","task_id":"T1","matched_completion_ids":["c1"]}"#)
        .expect(1)
        .create_async()
        .await;

    let (client, _) = create_test_client(&server.url());
    let response = client
        .create(
            "T1",
            json!({"score": 5}),
            vec!["tagA".to_string(), "tagB".to_string()],
            Some("nice".to_string()),
        )
        .await
        .unwrap();

    assert_json_eq!(
        response,
        json!({"id": "f1", "task_id": "T1", "matched_completion_ids": ["c1"]})
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_without_comment_sends_null() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/feedback")
        .match_body(Matcher::Json(json!({
            "task_id": "T1",
            "json_values": {"ok": true},
            "completion_tags_selector": ["tagA"],
            "comment": null,
            "organization_id": ORG_ID
        })))
        .with_status(201)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let (client, _) = create_test_client(&server.url());
    let response = client
        .create("T1", json!({"ok": true}), vec!["tagA".to_string()], None)
        .await
        .unwrap();

    assert_eq!(response, json!({}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_query_never_contains_task_id() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/feedback")
        .match_query(Matcher::Exact(format!(
            "organization_id={ORG_ID}&offset=0&limit=25"
        )))
        .match_header("x-log10-token", TOKEN)
        .match_header("x-log10-organization-id", ORG_ID)
        .with_status(200)
        .with_body(two_task_page().to_string())
        .expect(1)
        .create_async()
        .await;

    let (client, _) = create_test_client(&server.url());
    let page = client.list(0, 25, Some("a")).await.unwrap();

    // The service is not asked to filter, so both tasks come back
    assert_eq!(page.len(), 2);
    assert_eq!(page.meta["total"], 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_passes_offset_and_limit_through() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/feedback")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("organization_id".into(), ORG_ID.into()),
            Matcher::UrlEncoded("offset".into(), "50".into()),
            Matcher::UrlEncoded("limit".into(), "10".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"data":[]}"#)
        .expect(1)
        .create_async()
        .await;

    let (client, _) = create_test_client(&server.url());
    let params = ListFeedbackParams::default().with_offset(50).with_limit(10);
    let page = client.list_with(&params).await.unwrap();

    assert!(page.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_error_logs_server_message() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/feedback")
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"quota exceeded"}"#)
        .expect(1)
        .create_async()
        .await;

    let (client, logger) = create_test_client(&server.url());
    let err = client
        .create("T1", json!({}), vec!["t".to_string()], None)
        .await
        .unwrap_err();

    match &err {
        AppError::Status { status, payload } => {
            assert_eq!(*status, StatusCode::TOO_MANY_REQUESTS);
            assert_eq!(payload.as_ref().unwrap()["error"], "quota exceeded");
        }
        other => panic!("Unexpected error: {:?}", other),
    }
    assert_eq!(err.server_error().as_deref(), Some("quota exceeded"));
    assert!(
        logger
            .messages(Level::ERROR)
            .contains(&"quota exceeded".to_string())
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_error_logs_server_message() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/feedback")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body(r#"{"error":"quota exceeded"}"#)
        .expect(1)
        .create_async()
        .await;

    let (client, logger) = create_test_client(&server.url());
    let err = client.list(0, 25, None).await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    let errors = logger.messages(Level::ERROR);
    assert!(errors.contains(&"quota exceeded".to_string()));
    assert!(errors.iter().any(|m| m.contains("500")));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_with_plain_text_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/feedback")
        .with_status(502)
        .with_body("bad gateway")
        .expect(1)
        .create_async()
        .await;

    let (client, logger) = create_test_client(&server.url());
    let err = client
        .create("T1", json!({}), vec![], None)
        .await
        .unwrap_err();

    match &err {
        AppError::Status { status, payload } => {
            assert_eq!(*status, StatusCode::BAD_GATEWAY);
            assert!(payload.is_none());
        }
        other => panic!("Unexpected error: {:?}", other),
    }
    assert!(err.server_error().is_none());
    assert_eq!(logger.messages(Level::ERROR).len(), 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_success_with_invalid_json_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v1/feedback")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let (client, logger) = create_test_client(&server.url());
    let err = client.list(0, 25, None).await.unwrap_err();

    assert!(matches!(err, AppError::Json(_)));
    assert_eq!(logger.messages(Level::ERROR).len(), 1);
}

#[tokio::test]
async fn test_transport_failure_is_logged_and_returned() {
    let (client, logger) = create_test_client("http://127.0.0.1:1");
    let err = client.list(0, 25, None).await.unwrap_err();

    assert!(matches!(err, AppError::Network(_)));
    assert!(err.server_error().is_none());
    assert_eq!(logger.messages(Level::ERROR).len(), 1);
}

#[tokio::test]
async fn test_no_retry_on_failure() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/feedback")
        .with_status(503)
        .expect(1)
        .create_async()
        .await;

    let (client, _) = create_test_client(&server.url());
    assert!(client.create("T1", json!({}), vec![], None).await.is_err());
    mock.assert_async().await;
}

#[test]
fn test_invalid_header_value_fails_construction() {
    let config = Config::with_credentials("http://localhost", "bad\ntoken", ORG_ID);
    match FeedbackClient::new(config) {
        Err(AppError::InvalidInput(msg)) => assert!(msg.contains("x-log10-token")),
        Err(other) => panic!("Unexpected error: {:?}", other),
        Ok(_) => panic!("Expected construction to fail"),
    }
}

#[test]
fn test_client_keeps_config() {
    let client = FeedbackClient::new(test_config("http://localhost:9999/").with_timeout(3)).unwrap();
    assert_eq!(client.config().base_url, "http://localhost:9999");
    assert_eq!(client.config().organization_id, ORG_ID);
    assert_eq!(client.config().timeout, Some(3));
}
