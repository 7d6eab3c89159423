use axum::Router;
use axum::extract::State;
use axum::routing::get;

use crate::state::AppState;

/// Build the database display route group: `GET /db`
pub fn router() -> Router<AppState> {
    Router::new().route("/db", get(db))
}

/// Render the configured database display fields.
///
/// Unset fields render as empty strings around the separator.
async fn db(State(state): State<AppState>) -> String {
    format!("{} - {}", state.config.db_name, state.config.db_user)
}
