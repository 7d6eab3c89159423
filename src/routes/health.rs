use axum::Router;
use axum::routing::get;

use crate::state::AppState;

/// Environment key resolved on every call rather than bound at startup.
const HEALTH_SUFFIX_VAR: &str = "HELLO_MSG";

/// Build the liveness route group: `GET /healthz`
pub fn router() -> Router<AppState> {
    Router::new().route("/healthz", get(healthz))
}

/// Liveness handler. The suffix comes from the process environment at call
/// time; an absent variable yields the bare `UP-` prefix, never an error.
async fn healthz() -> String {
    up_message(std::env::var(HEALTH_SUFFIX_VAR).ok())
}

fn up_message(suffix: Option<String>) -> String {
    format!("UP-{}", suffix.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_up_message_with_suffix() {
        assert_eq!(up_message(Some("Hello".to_string())), "UP-Hello");
    }

    #[test]
    fn test_up_message_without_suffix() {
        assert_eq!(up_message(None), "UP-");
    }
}
