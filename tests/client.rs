//! Integration tests for the request executor, run against a local mock
//! server.

use flate2::Compression;
use flate2::write::GzEncoder;
use httpmock::prelude::*;
use mandrill_client::{ApiErrorKind, Client, Error};
use serde_json::json;
use std::io::Write;

fn client_for(server: &MockServer) -> Client {
    Client::builder("test-key")
        .base_url(server.base_url())
        .build()
        .expect("client should build")
}

fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

const ERROR_DOC: &str =
    r#"{"status":"error","code":-1,"name":"Invalid_Key","message":"Invalid API key"}"#;

#[tokio::test]
async fn success_body_passes_through_verbatim() {
    let server = MockServer::start_async().await;
    let body = r#"[{"tag":"welcome","sent":12}]"#;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/tags/list.json")
                .header("content-type", "application/json")
                .header("accept", "application/json")
                .header("accept-encoding", "gzip")
                .json_body(json!({"key": "test-key"}));
            then.status(200)
                .header("content-type", "application/json")
                .body(body);
        })
        .await;

    let raw = client_for(&server)
        .execute("/tags/list.json", &json!({}))
        .await
        .unwrap();
    mock.assert_async().await;
    assert_eq!(raw, body.as_bytes());
}

#[tokio::test]
async fn payload_fields_and_key_share_the_envelope() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/tags/info.json")
                .json_body(json!({"key": "test-key", "tag": "welcome"}));
            then.status(200).body("{}");
        })
        .await;

    client_for(&server)
        .execute("/tags/info.json", &json!({"tag": "welcome"}))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn error_document_on_200_is_classified() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/users/ping.json");
            then.status(200)
                .header("content-type", "application/json")
                .body(ERROR_DOC);
        })
        .await;

    let err = client_for(&server)
        .users()
        .ping()
        .await
        .expect_err("error document should classify");
    match err {
        Error::Api(api) => {
            assert_eq!(api.status, "error");
            assert_eq!(api.code, -1);
            assert_eq!(api.name, "Invalid_Key");
            assert_eq!(api.message, "Invalid API key");
            assert_eq!(api.kind(), ApiErrorKind::InvalidKey);
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn error_document_on_500_is_classified_identically() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/users/ping.json");
            then.status(500)
                .header("content-type", "application/json")
                .body(ERROR_DOC);
        })
        .await;

    let err = client_for(&server).users().ping().await.unwrap_err();
    match err {
        Error::Api(api) => assert_eq!(api.name, "Invalid_Key"),
        other => panic!("expected Error::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn four_field_near_misses_stay_payloads() {
    let server = MockServer::start_async().await;
    // same field names plus one extra; must not be mistaken for an error
    let body = r#"{"status":"sent","code":7,"name":"welcome","message":"hi","id":"abc"}"#;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/messages/info.json");
            then.status(200).body(body);
        })
        .await;

    let raw = client_for(&server)
        .execute("/messages/info.json", &json!({"id": "abc"}))
        .await
        .unwrap();
    assert_eq!(raw, body.as_bytes());
}

#[tokio::test]
async fn gzip_response_matches_identity_response() {
    let body = r#"[{"tag":"welcome","sent":12}]"#;

    let plain_server = MockServer::start_async().await;
    plain_server
        .mock_async(|when, then| {
            when.method(POST).path("/tags/list.json");
            then.status(200).body(body);
        })
        .await;

    let gzip_server = MockServer::start_async().await;
    gzip_server
        .mock_async(|when, then| {
            when.method(POST).path("/tags/list.json");
            then.status(200)
                .header("content-encoding", "gzip")
                .body(gzip(body.as_bytes()));
        })
        .await;

    let plain = client_for(&plain_server)
        .execute("/tags/list.json", &json!({}))
        .await
        .unwrap();
    let unzipped = client_for(&gzip_server)
        .execute("/tags/list.json", &json!({}))
        .await
        .unwrap();
    assert_eq!(plain, unzipped);
    assert_eq!(unzipped, body.as_bytes());
}

#[tokio::test]
async fn corrupt_gzip_body_is_a_transport_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/tags/list.json");
            then.status(200)
                .header("content-encoding", "gzip")
                .body("definitely not gzip");
        })
        .await;

    let err = client_for(&server)
        .execute("/tags/list.json", &json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn empty_payload_never_reaches_the_wire() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST);
            then.status(200).body("{}");
        })
        .await;

    let err = client_for(&server)
        .execute("/users/ping.json", &())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::EmptyRequest), "got {err:?}");
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn ping_acknowledges_pong() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/users/ping.json")
                .json_body(json!({"key": "test-key"}));
            then.status(200).body("\"PONG!\"");
        })
        .await;

    assert!(client_for(&server).users().ping().await.unwrap());
}

#[tokio::test]
async fn missing_required_field_surfaces_validation_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/messages/send.json");
            then.status(500).body(
                r#"{"status":"error","code":-2,"name":"ValidationError","message":"You must specify a from_email value"}"#,
            );
        })
        .await;

    let message = mandrill_client::Message {
        to: vec![mandrill_client::Recipient {
            email: "user@example.com".into(),
            ..Default::default()
        }],
        ..Default::default()
    };
    let err = client_for(&server)
        .messages()
        .send(&message, &mandrill_client::SendOptions::default())
        .await
        .unwrap_err();
    match err {
        Error::Api(api) => {
            assert_eq!(api.name, "ValidationError");
            assert_eq!(api.kind(), ApiErrorKind::Validation);
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_error_name_is_preserved_not_dropped() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/users/ping.json");
            then.status(200).body(
                r#"{"status":"error","code":99,"name":"Brand_New_Error","message":"novel failure"}"#,
            );
        })
        .await;

    let err = client_for(&server).users().ping().await.unwrap_err();
    match err {
        Error::Api(api) => {
            assert_eq!(api.kind(), ApiErrorKind::Unrecognized);
            assert_eq!(api.name, "Brand_New_Error");
            assert_eq!(api.code, 99);
            assert_eq!(api.message, "novel failure");
        }
        other => panic!("expected Error::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn typed_layer_decodes_success_payloads() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/urls/list.json");
            then.status(200).body(
                r#"[{"url":"https://example.com","sent":5,"clicks":3,"unique_clicks":2}]"#,
            );
        })
        .await;

    let stats = client_for(&server).urls().list().await.unwrap();
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].url, "https://example.com");
    assert_eq!(stats[0].clicks, 3);
}

#[tokio::test]
async fn typed_layer_reports_decode_failures() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/urls/list.json");
            then.status(200).body(r#"{"unexpected":"shape"}"#);
        })
        .await;

    let err = client_for(&server).urls().list().await.unwrap_err();
    assert!(matches!(err, Error::Deserialize(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // nothing listens on this port
    let client = Client::builder("test-key")
        .base_url("http://127.0.0.1:9")
        .build()
        .unwrap();
    let err = client.users().ping().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "got {err:?}");
}
