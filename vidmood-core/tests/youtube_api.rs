//! Integration tests for the YouTube comment-listing client.
//!
//! Exercises the continuation-token protocol, the error payload path, and
//! malformed-body handling against a local wiremock server.

use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vidmood_core::collect::{Collector, CommentSource};
use vidmood_core::error::CollectError;
use vidmood_core::throttle::FixedDelay;
use vidmood_core::youtube::YouTubeSource;

fn thread_item(text: &str) -> serde_json::Value {
    json!({
        "snippet": {
            "topLevelComment": {
                "snippet": { "textDisplay": text }
            }
        }
    })
}

async fn source_for(server: &MockServer) -> YouTubeSource {
    YouTubeSource::new("test-key")
        .expect("client build")
        .with_api_base(server.uri())
}

#[tokio::test]
async fn first_page_sends_expected_query_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .and(query_param("part", "snippet"))
        .and(query_param("videoId", "abc123"))
        .and(query_param("maxResults", "100"))
        .and(query_param("key", "test-key"))
        .and(query_param_is_missing("pageToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [thread_item("hello")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let source = source_for(&server).await;
    let page = source.comment_page("abc123", None).await.expect("page");
    assert_eq!(page.comments, vec!["hello"]);
    assert!(page.next_page_token.is_none());
}

#[tokio::test]
async fn pagination_follows_next_page_token_until_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .and(query_param_is_missing("pageToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "nextPageToken": "tok-2",
            "items": [thread_item("first"), thread_item("second")]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .and(query_param("pageToken", "tok-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [thread_item("third")]
        })))
        .mount(&server)
        .await;

    let collector =
        Collector::with_throttle(source_for(&server).await, FixedDelay::none());
    let outcome = collector.fetch_all("abc123").await;

    assert!(outcome.error.is_none());
    assert_eq!(outcome.comments, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn error_payload_maps_to_api_error_with_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "code": 403, "message": "quotaExceeded" }
        })))
        .mount(&server)
        .await;

    let source = source_for(&server).await;
    let err = source.comment_page("abc123", None).await.expect_err("must fail");
    match err {
        CollectError::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "quotaExceeded");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn garbage_body_maps_to_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let source = source_for(&server).await;
    let err = source.comment_page("abc123", None).await.expect_err("must fail");
    assert!(matches!(err, CollectError::Malformed(_)));
}

#[tokio::test]
async fn failure_mid_pagination_keeps_first_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .and(query_param_is_missing("pageToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "nextPageToken": "tok-2",
            "items": [thread_item("kept")]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .and(query_param("pageToken", "tok-2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let collector =
        Collector::with_throttle(source_for(&server).await, FixedDelay::none());
    let outcome = collector.fetch_all("abc123").await;

    assert_eq!(outcome.comments, vec!["kept"]);
    assert!(matches!(outcome.error, Some(CollectError::Api { status: 500, .. })));
}
