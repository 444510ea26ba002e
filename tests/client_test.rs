use std::collections::HashMap;

use reqwest::{Client, Method, header};

use lektorcli::jellyfin::client::{JellyfinClient, ServerConfig, decode_body};
use lektorcli::types::{Item, PlaybackInfo};

// Helper function to create a client for a test server
fn create_client(address: &str) -> JellyfinClient {
    JellyfinClient::new(ServerConfig::new(
        address.to_string(),
        "test-token".to_string(),
    ))
}

#[test]
fn test_request_url_concatenation() {
    let client = create_client("jellyfin.example.org");

    // Fixed scheme, configured host, fixed port, path appended as-is
    assert_eq!(
        client.request_url("Items/abc123/PlaybackInfo"),
        "https://jellyfin.example.org:8920/Items/abc123/PlaybackInfo"
    );
}

#[test]
fn test_request_url_keeps_query_parameters() {
    let client = create_client("10.0.0.5");

    // Query parameters are the caller's concatenation, not escaped
    assert_eq!(
        client.request_url("Collections?name=Lektor"),
        "https://10.0.0.5:8920/Collections?name=Lektor"
    );
    assert_eq!(
        client.request_url("Collections/col1/Items?ids=item1"),
        "https://10.0.0.5:8920/Collections/col1/Items?ids=item1"
    );
}

#[test]
fn test_server_config_defaults_to_insecure() {
    let config = ServerConfig::new("host".to_string(), "token".to_string());

    // Trusting any certificate is the explicit default
    assert!(!config.verify_certificates);

    let config = config.with_certificate_verification(true);
    assert!(config.verify_certificates);
}

#[test]
fn test_build_request_sets_fixed_headers() {
    let client = create_client("jellyfin.example.org");
    let http = Client::new();

    let request = client
        .build_request::<()>(&http, Method::GET, "Items?ParentId=lib1", None)
        .unwrap();

    // The three headers are set on every request, regardless of verb or body
    assert_eq!(
        request.headers().get(header::ACCEPT).unwrap(),
        "application/json"
    );
    assert_eq!(
        request.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(request.headers().get("X-Emby-Token").unwrap(), "test-token");

    assert_eq!(request.method(), Method::GET);
    assert_eq!(
        request.url().as_str(),
        "https://jellyfin.example.org:8920/Items?ParentId=lib1"
    );
}

#[test]
fn test_build_request_without_body_is_empty() {
    let client = create_client("jellyfin.example.org");
    let http = Client::new();

    let request = client
        .build_request::<()>(&http, Method::POST, "Collections?name=Lektor", None)
        .unwrap();

    // A None body produces an empty request body, not a missing one
    assert_eq!(request.body().unwrap().as_bytes(), Some(&b""[..]));
}

#[test]
fn test_build_request_body_is_json_encoding() {
    let client = create_client("jellyfin.example.org");
    let http = Client::new();

    let item = Item {
        name: "Seksmisja".to_string(),
        id: "abc123".to_string(),
    };
    let request = client
        .build_request(&http, Method::POST, "Items", Some(&item))
        .unwrap();

    // The bytes on the wire equal the JSON encoding of the value
    let sent = request.body().unwrap().as_bytes().unwrap();
    assert_eq!(sent, serde_json::to_vec(&item).unwrap().as_slice());
}

#[test]
fn test_build_request_rejects_unencodable_body() {
    let client = create_client("jellyfin.example.org");
    let http = Client::new();

    // Maps with non-string keys cannot be represented as JSON
    let body: HashMap<(u8, u8), &str> = HashMap::from([((1, 2), "x")]);
    let err = client
        .build_request(&http, Method::POST, "Items", Some(&body))
        .unwrap_err();

    assert!(err.to_string().contains("encode"));
    assert!(err.raw_body().is_none());
}

#[tokio::test]
async fn test_execute_transport_failure_returns_no_body() {
    // The .invalid TLD is reserved and never resolves, so the call fails at
    // the transport before any response body exists
    let client = create_client("jellyfin.invalid");

    let err = client
        .execute::<()>(Method::GET, "Items", None)
        .await
        .unwrap_err();

    assert!(err.raw_body().is_none());
}

#[test]
fn test_decode_body_well_formed() {
    let item: Item = decode_body(r#"{"Name": "Lektor", "Id": "col1"}"#.to_string()).unwrap();
    assert_eq!(item.name, "Lektor");
    assert_eq!(item.id, "col1");
}

#[test]
fn test_decode_body_failure_keeps_raw_text() {
    let raw = "<html>502 Bad Gateway</html>";
    let err = decode_body::<PlaybackInfo>(raw.to_string()).unwrap_err();

    // The already-read body is returned alongside the error, not discarded
    assert_eq!(err.raw_body(), Some(raw));
    assert!(err.to_string().contains("decode"));
}

#[test]
fn test_decode_body_failure_on_truncated_json() {
    let raw = r#"{"MediaSources": ["#;
    let err = decode_body::<PlaybackInfo>(raw.to_string()).unwrap_err();
    assert_eq!(err.raw_body(), Some(raw));
}
