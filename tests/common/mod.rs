#![allow(dead_code)]

use axum::extract::ConnectInfo;
use axum_test::TestServer;
use shortly::api::middleware::rate_limit::ClientIdentity;
use shortly::infrastructure::persistence::InMemoryLinkRepository;
use shortly::infrastructure::rate_limit::RateLimitPolicy;
use shortly::routes::routes;
use shortly::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::Layer;

pub const BASE_URL: &str = "https://short.ly";

/// Inserts a fixed peer address, standing in for `into_make_service_with_connect_info`.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

/// State over an in-memory store with a budget no test will exhaust.
pub fn create_test_state(repo: Arc<InMemoryLinkRepository>) -> AppState {
    create_limited_state(repo, 10_000)
}

/// State allowing `max_requests` per minute and client on each endpoint.
pub fn create_limited_state(repo: Arc<InMemoryLinkRepository>, max_requests: u32) -> AppState {
    let policy = RateLimitPolicy::new(Duration::from_secs(60), max_requests).unwrap();
    AppState::new(repo, BASE_URL, &policy, ClientIdentity::Peer)
}

pub fn test_server(state: AppState) -> TestServer {
    let app = routes(state).layer(MockConnectInfoLayer);
    TestServer::new(app).unwrap()
}
