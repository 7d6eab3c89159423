mod db;
mod health;
mod hello;

use axum::Router;

use crate::state::AppState;

/// Build the complete application router.
///
/// Structure:
/// - `GET /` — configured greeting plus the caller's address
/// - `GET /db` — configured database display fields
/// - `GET /healthz` — liveness string (used by orchestrator probes)
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(hello::router())
        .merge(db::router())
        .merge(health::router())
}
