mod common;

use httpmock::prelude::*;
use improvmx_client::{Error, ListOption};
use serde_json::json;

#[tokio::test]
async fn create_returns_the_new_alias() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/domains/example.com/aliases/")
                .json_body(json!({ "alias": "richard", "forward": "richard@example.test" }));
            then.status(200).json_body(json!({
                "alias": { "alias": "richard", "forward": "richard@example.test", "id": 1 },
                "success": true
            }));
        })
        .await;

    let session = common::session(&server);
    let alias = session
        .aliases()
        .create("example.com", "richard", "richard@example.test")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(alias.name, "richard");
    assert_eq!(alias.address, "richard@example.test");
}

#[tokio::test]
async fn list_aggregates_pages_for_a_domain() {
    let server = MockServer::start_async().await;
    let first = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/domains/example.com/aliases/")
                .query_param("page", "1");
            then.status(200).json_body(json!({
                "aliases": [
                    { "alias": "dinesh", "forward": "dinesh@example.test" },
                    { "alias": "gilfoyle", "forward": "gilfoyle@example.test" }
                ],
                "total": 3,
                "page": 1,
                "success": true
            }));
        })
        .await;
    let second = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/domains/example.com/aliases/")
                .query_param("page", "2");
            then.status(200).json_body(json!({
                "aliases": [{ "alias": "richard", "forward": "richard@example.test" }],
                "total": 3,
                "page": 2,
                "success": true
            }));
        })
        .await;

    let session = common::session(&server);
    let aliases = session.aliases().list("example.com", None).await.unwrap();

    first.assert_async().await;
    second.assert_async().await;
    let names: Vec<_> = aliases.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["dinesh", "gilfoyle", "richard"]);
}

#[tokio::test]
async fn list_transmits_prefix_and_active_filters() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/domains/example.com/aliases/")
                .query_param("q", "ri")
                .query_param("is_active", "0")
                .query_param("page", "1");
            then.status(200).json_body(json!({
                "aliases": [{ "alias": "richard", "forward": "richard@example.test" }],
                "total": 1,
                "page": 1,
                "success": true
            }));
        })
        .await;

    let option = ListOption::new().starts_with("ri").is_active(false);
    let session = common::session(&server);
    let aliases = session
        .aliases()
        .list("example.com", Some(&option))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(aliases.len(), 1);
}

#[tokio::test]
async fn list_rejects_invalid_page_before_any_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/domains/example.com/aliases/");
            then.status(200)
                .json_body(json!({ "aliases": [], "total": 0, "success": true }));
        })
        .await;

    let session = common::session(&server);
    let option = ListOption::new().page(-1);
    let error = session
        .aliases()
        .list("example.com", Some(&option))
        .await
        .unwrap_err();

    assert!(matches!(error, Error::InvalidPage(-1)));
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn read_returns_alias() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/domains/example.com/aliases/richard/");
            then.status(200).json_body(json!({
                "alias": { "alias": "richard", "forward": "richard@example.test", "id": 7 },
                "success": true
            }));
        })
        .await;

    let session = common::session(&server);
    let alias = session
        .aliases()
        .read("example.com", "richard")
        .await
        .unwrap();

    assert_eq!(alias.id, 7);
    assert_eq!(alias.address, "richard@example.test");
}

#[tokio::test]
async fn update_transmits_only_the_forward_address() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/domains/example.com/aliases/richard/")
                .json_body(json!({ "forward": "richard@piedpiper.com" }));
            then.status(200).json_body(json!({
                "alias": { "alias": "richard", "forward": "richard@piedpiper.com", "id": 7 },
                "success": true
            }));
        })
        .await;

    let session = common::session(&server);
    let alias = session
        .aliases()
        .update("example.com", "richard", "richard@piedpiper.com")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(alias.address, "richard@piedpiper.com");
}

#[tokio::test]
async fn delete_succeeds() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/domains/example.com/aliases/richard/");
            then.status(200).json_body(json!({ "success": true }));
        })
        .await;

    let session = common::session(&server);
    session
        .aliases()
        .delete("example.com", "richard")
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn logs_are_scoped_to_the_alias() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/domains/example.com/logs/richard/");
            then.status(200).json_body(json!({
                "logs": [{ "id": "log-1", "subject": "hello richard" }],
                "success": true
            }));
        })
        .await;

    let session = common::session(&server);
    let logs = session
        .aliases()
        .logs("example.com", "richard")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(logs[0].subject, "hello richard");
}

#[tokio::test]
async fn create_surfaces_api_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/domains/example.com/aliases/");
            then.status(420).json_body(common::error_body());
        })
        .await;

    let session = common::session(&server);
    let error = session
        .aliases()
        .create("example.com", "richard", "richard@example.test")
        .await
        .unwrap_err();

    assert!(matches!(error, Error::Api { code: 420, .. }));
}
