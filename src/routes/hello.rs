use std::net::SocketAddr;

use axum::Router;
use axum::extract::{ConnectInfo, State};
use axum::http::HeaderMap;
use axum::routing::get;

use crate::ip;
use crate::services::GreetingService;
use crate::state::AppState;

/// Build the greeting route group: `GET /`
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(hello))
}

/// Greet the caller with the configured message and their resolved address.
async fn hello(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> String {
    let client = ip::client_addr(&headers, &peer.ip().to_string());
    tracing::debug!(%client, "resolved client address");

    GreetingService::say_hello(format!("{} -- 客户端IP：{client}", state.config.greeting))
}
