//! Integration tests for Resource handles.
//!
//! These tests verify lazy loading (fetch counts included), attribute
//! access, the absorb rewrites, partial updates, and deletion, against a
//! local mock server.

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use twilio_api::{Client, Credentials, Error, Params};

fn test_client(server: &MockServer) -> Client {
    Client::builder()
        .credentials(Credentials::new("AC_test", "token"))
        .base_url(server.uri())
        .build()
        .unwrap()
}

const CALL_PATH: &str = "/2010-04-01/Accounts/AC_test/Calls/CA1.json";

// ============================================================================
// Lazy Loading
// ============================================================================

#[tokio::test]
async fn keyed_handle_fetches_exactly_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CALL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sid": "CA1",
            "status": "completed",
            "duration": "61"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let call = client.calls().get("CA1");
    assert!(!call.is_loaded().await);

    // First read triggers the single fetch; later reads of different
    // fields are served from the cached record.
    assert_eq!(call.get("status").await.unwrap(), json!("completed"));
    assert!(call.is_loaded().await);
    assert_eq!(call.get("duration").await.unwrap(), json!("61"));
    assert_eq!(call.sid().await.unwrap(), "CA1");
}

#[tokio::test]
async fn handle_construction_performs_no_io() {
    let server = MockServer::start().await;
    // No mocks mounted: any request would fail the test through the error
    // path below.
    let client = test_client(&server);
    let call = client.calls().get("CA1");
    assert_eq!(call.key(), Some("CA1"));
    assert!(call.uri().ends_with("/Calls/CA1"));
    assert!(!call.is_loaded().await);
}

#[tokio::test]
async fn fetch_errors_surface_from_the_triggering_read() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CALL_PATH))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let call = client.calls().get("CA1");
    let Err(Error::NotFound { url }) = call.get("status").await else {
        panic!("expected NotFound");
    };
    assert!(url.contains("/2010-04-01/Accounts/AC_test/Calls/CA1"));
}

#[tokio::test]
async fn missing_attribute_after_load_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CALL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sid": "CA1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let call = client.calls().get("CA1");
    assert!(matches!(
        call.get("no_such_field").await,
        Err(Error::MissingAttribute { attribute, .. }) if attribute == "no_such_field"
    ));
}

// ============================================================================
// Absorb Rewrites
// ============================================================================

#[tokio::test]
async fn from_is_renamed_and_subresources_expand() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CALL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sid": "CA1",
            "from": "+14158675309",
            "subresource_uris": {
                "recordings": "/2010-04-01/Accounts/AC_test/Calls/CA1/Recordings.json"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/2010-04-01/Accounts/AC_test/Calls/CA1/Recordings.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recordings": [{"sid": "RE1"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let call = client.calls().get("CA1");
    assert_eq!(call.get("sender").await.unwrap(), json!("+14158675309"));

    // The link field became a nested collection bound to the same
    // credentials, usable like any other.
    let recordings = call.subresource("recordings").await.unwrap();
    let all = recordings.values(Params::new()).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].key(), Some("RE1"));
}

// ============================================================================
// Update and Delete
// ============================================================================

#[tokio::test]
async fn update_posts_fields_and_replaces_the_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CALL_PATH))
        .and(body_string_contains("Status=completed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sid": "CA1",
            "status": "completed",
            "from": "+14158675309"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let call = client.calls().get("CA1");
    call.update(&Params::new().with("status", "completed"))
        .await
        .unwrap();

    // The server's response is the new authoritative record; no GET is
    // mounted, so these reads prove the handle is loaded.
    assert_eq!(call.get("status").await.unwrap(), json!("completed"));
    assert_eq!(call.get("sender").await.unwrap(), json!("+14158675309"));
}

#[tokio::test]
async fn hangup_and_cancel_set_their_status_sentinels() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(CALL_PATH))
        .and(body_string_contains("Status=completed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sid": "CA1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/2010-04-01/Accounts/AC_test/Calls/CA2.json"))
        .and(body_string_contains("Status=canceled"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sid": "CA2"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client.calls().hangup("CA1").await.unwrap();
    client.calls().cancel("CA2").await.unwrap();
}

#[tokio::test]
async fn delete_issues_a_remote_delete() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(CALL_PATH))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client.calls().delete("CA1").await.unwrap();
}

// ============================================================================
// Sandbox Singleton
// ============================================================================

#[tokio::test]
async fn sandbox_is_updatable_without_a_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2010-04-01/Accounts/AC_test/Sandbox.json"))
        .and(body_string_contains("VoiceUrl=https%3A%2F%2Fexample.com%2Fvoice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pin": "12345678",
            "voice_url": "https://example.com/voice"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let sandbox = client.sandbox();
    sandbox
        .update(&Params::new().with("voice_url", "https://example.com/voice"))
        .await
        .unwrap();
    assert_eq!(sandbox.get("pin").await.unwrap(), json!("12345678"));
}
