use axum::http::HeaderMap;

/// Forwarding headers consulted in priority order. `x-forwarded-for` is the
/// standard; the other two are set by some older reverse proxies.
const FORWARDING_HEADERS: [&str; 3] = ["x-forwarded-for", "proxy-client-ip", "wl-proxy-client-ip"];

/// Sentinel some proxies emit instead of omitting the header.
const UNKNOWN: &str = "unknown";

/// Proxy-aware client address extraction.
///
/// Walks the forwarding headers in priority order and returns the first
/// usable value. `x-forwarded-for` may carry a comma-separated proxy chain,
/// in which the leading entry is the original client. Falls back to the
/// transport-level peer address when no header yields a value.
///
/// The result is display text; it is not validated as an IP address.
#[must_use]
pub fn client_addr(headers: &HeaderMap, peer_addr: &str) -> String {
    for name in FORWARDING_HEADERS {
        let Some(value) = headers.get(name).and_then(|v| v.to_str().ok()) else {
            continue;
        };
        if let Some(addr) = first_usable_entry(value) {
            return addr.to_string();
        }
    }
    peer_addr.to_string()
}

/// First entry of a forwarding header value that is non-empty and not the
/// `unknown` placeholder, trimmed of surrounding whitespace.
fn first_usable_entry(value: &str) -> Option<&str> {
    value
        .split(',')
        .map(str::trim)
        .find(|entry| !entry.is_empty() && !entry.eq_ignore_ascii_case(UNKNOWN))
}
