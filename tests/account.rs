mod common;

use httpmock::prelude::*;
use improvmx_client::Error;
use serde_json::json;

#[tokio::test]
async fn read_returns_account_profile() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/account/")
                // base64("api:token"), the Basic credentials for our token
                .header("authorization", "Basic YXBpOnRva2Vu");
            then.status(200).json_body(json!({
                "account": {
                    "email": "gavin@hooli.com",
                    "billing_email": "billing@hooli.com",
                    "premium": true,
                    "created": 1581604970,
                    "limits": { "aliases": 150, "domains": 30 },
                    "plan": { "name": "Premium", "price": 9, "yearly": false }
                },
                "success": true
            }));
        })
        .await;

    let session = common::session(&server);
    let account = session.account().read().await.unwrap();

    mock.assert_async().await;
    assert_eq!(account.email, "gavin@hooli.com");
    assert!(account.premium);
    assert_eq!(account.created_at.unix(), 1_581_604_970);
    assert_eq!(account.limits.aliases, 150);
    assert_eq!(account.plan.unwrap().name, "Premium");
}

#[tokio::test]
async fn labels_returns_whitelabels() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/account/whitelabels/");
            then.status(200).json_body(json!({
                "whitelabels": [{ "name": "piedpiper.com" }, { "name": "hooli.com" }],
                "success": true
            }));
        })
        .await;

    let session = common::session(&server);
    let labels = session.account().labels().await.unwrap();

    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0].name, "piedpiper.com");
}

#[tokio::test]
async fn read_surfaces_api_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/account/");
            then.status(420).json_body(common::error_body());
        })
        .await;

    let session = common::session(&server);
    let error = session.account().read().await.unwrap_err();

    match error {
        Error::Api { code, message } => {
            assert_eq!(code, 420);
            assert_eq!(message, "fake error");
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_envelope_failure_surfaces_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/account/");
            then.status(500).body("internal server error");
        })
        .await;

    let session = common::session(&server);
    let error = session.account().read().await.unwrap_err();

    assert!(matches!(error, Error::Status(status) if status.as_u16() == 500));
}

#[tokio::test]
async fn success_false_on_ok_status_surfaces_api_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/account/");
            then.status(200)
                .json_body(json!({ "error": "account is locked", "code": 400, "success": false }));
        })
        .await;

    let session = common::session(&server);
    let error = session.account().read().await.unwrap_err();

    assert_eq!(error.to_string(), "400: account is locked");
}
