// Integration tests for the request engine against a live HTTP server

use mockito::{Matcher, Server};
use saaswire::credentials::{EMAIL, TENANT_ID, TOKEN};
use saaswire::{
    ApiClient, AuthStrategy, CredentialSet, EngineError, HttpTransport, RequestDescriptor,
    Transport,
};
use serde_json::json;
use std::sync::Arc;

fn transport() -> Arc<dyn Transport> {
    Arc::new(HttpTransport::new("saaswire-tests").unwrap())
}

#[tokio::test]
async fn test_basic_token_round_trip() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/users/me.json")
        .match_header(
            "authorization",
            "Basic am9obkBleGFtcGxlLmNvbS90b2tlbjphYmMxMjM=",
        )
        .match_header("user-agent", "saaswire-tests")
        .with_status(200)
        .with_body(r#"{"user": {"name": "John", "role": "admin"}}"#)
        .create_async()
        .await;

    let creds = CredentialSet::new()
        .with(EMAIL, "john@example.com")
        .with(TOKEN, "abc123");
    let client = ApiClient::new(
        format!("{}/api/v2/", server.url()),
        AuthStrategy::basic_token(creds).unwrap(),
        transport(),
    );

    let response = client
        .send(RequestDescriptor::get("/users/me.json"))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body["user"]["role"], "admin");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_post_body_and_tenant_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/Invoices")
        .match_header("authorization", "Bearer t0k")
        .match_header("xero-tenant-id", "org-1")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"Type": "ACCREC"})))
        .with_status(201)
        .with_body(r#"{"Invoices": []}"#)
        .create_async()
        .await;

    let creds = CredentialSet::new().with(TOKEN, "t0k").with(TENANT_ID, "org-1");
    let client = ApiClient::new(
        server.url(),
        AuthStrategy::bearer_with_tenant("Xero-tenant-id", creds).unwrap(),
        transport(),
    );

    let response = client
        .send(RequestDescriptor::post("/Invoices").json(json!({"Type": "ACCREC"})))
        .await
        .unwrap();

    assert_eq!(response.status, 201);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_is_not_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/crm/v3/objects/contacts")
        .match_query(Matcher::Any)
        .with_status(429)
        .with_body(r#"{"status":"error","message":"You have reached your secondly limit."}"#)
        .expect(1)
        .create_async()
        .await;

    let client = ApiClient::new(
        server.url(),
        AuthStrategy::bearer(CredentialSet::new().with(TOKEN, "pat")).unwrap(),
        transport(),
    );

    let err = client
        .send(RequestDescriptor::get("/crm/v3/objects/contacts").query("limit", 10))
        .await
        .unwrap_err();

    match err {
        EngineError::HttpStatus { code, body } => {
            assert_eq!(code, 429);
            assert!(body.contains("secondly limit"));
        }
        other => panic!("expected HttpStatus, got {:?}", other),
    }
    mock.assert_async().await;
}
