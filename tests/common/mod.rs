use std::net::{IpAddr, SocketAddr};

use axum::Router;
use axum::body::Body;
use axum::extract::connect_info::MockConnectInfo;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use greeter_api::config::Config;
use greeter_api::state::AppState;

/// Peer address injected for every test request, as handlers render it.
pub const PEER_ADDR: &str = "203.0.113.9";

/// Build the app router with a fixed test configuration and mock peer address.
pub fn test_app(config: Config) -> Router {
    let peer = SocketAddr::from(([203, 0, 113, 9], 4711));

    greeter_api::routes::router()
        .with_state(AppState { config })
        .layer(MockConnectInfo(peer))
}

/// Baseline configuration used by the route tests.
pub fn test_config() -> Config {
    Config {
        greeting: "Hello".to_string(),
        db_name: "mydb".to_string(),
        db_user: "admin".to_string(),
        server_host: IpAddr::from([127, 0, 0, 1]),
        server_port: 0,
        log_level: "warn".to_string(),
    }
}

/// Test helper: send a GET request to the app and return (status, body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    get_with_headers(app, uri, &[]).await
}

/// Test helper: send a GET request with extra headers and return (status, body).
pub async fn get_with_headers(
    app: &Router,
    uri: &str,
    headers: &[(&str, &str)],
) -> (StatusCode, String) {
    let mut builder = Request::builder().method("GET").uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = builder.body(Body::empty()).unwrap_or_default();

    let response = app.clone().oneshot(request).await.unwrap_or_default();

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .unwrap_or_default();
    let body_str = String::from_utf8(body.to_vec()).unwrap_or_default();

    (status, body_str)
}
