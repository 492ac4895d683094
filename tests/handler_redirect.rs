mod common;

use serde_json::json;
use shortly::domain::entities::NewLink;
use shortly::domain::repositories::LinkRepository;
use shortly::infrastructure::persistence::InMemoryLinkRepository;
use std::sync::Arc;

#[tokio::test]
async fn test_redirect_success() {
    let repo = Arc::new(InMemoryLinkRepository::new());
    repo.insert(NewLink::compose(
        common::BASE_URL,
        "ab3D",
        "https://example.com/target",
    ))
    .await
    .unwrap();

    let server = common::test_server(common::create_test_state(repo));

    let response = server.get("/ab3D").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let server = common::test_server(common::create_test_state(repo));

    let response = server.get("/zzzz").await;

    response.assert_status_not_found();
    response.assert_json(&json!({ "error": "Url not found" }));
}

#[tokio::test]
async fn test_redirect_malformed_code_not_found() {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let server = common::test_server(common::create_test_state(repo));

    let response = server.get("/definitely-not-a-code").await;

    response.assert_status_not_found();
    response.assert_json(&json!({ "error": "Url not found" }));
}

#[tokio::test]
async fn test_shorten_then_redirect_round_trip() {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let server = common::test_server(common::create_test_state(repo));

    let json = server
        .post("/shorten")
        .json(&json!({ "fullUrl": "https://example.com/some/page?q=1" }))
        .await
        .json::<serde_json::Value>();

    let short_url = json["shortUrl"].as_str().unwrap();
    let path = short_url.strip_prefix(common::BASE_URL).unwrap();

    let response = server.get(path).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(
        response.header("location"),
        "https://example.com/some/page?q=1"
    );
}
