mod common;

use shortly::infrastructure::persistence::InMemoryLinkRepository;
use std::sync::Arc;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::test_server(common::create_test_state(Arc::new(
        InMemoryLinkRepository::new(),
    )));

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_is_not_rate_limited() {
    let server = common::test_server(common::create_limited_state(
        Arc::new(InMemoryLinkRepository::new()),
        1,
    ));

    for _ in 0..5 {
        server.get("/health").await.assert_status_ok();
    }
}
