use axum::http::{header, HeaderMap};
use cookie::Cookie;

/// Name of the cookie carrying the backend bearer token.
pub const SESSION_COOKIE: &str = "jwt";

/// Extract the session token from the `jwt` cookie. Other credentials, such
/// as an `Authorization` header, are not a session.
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    extract_cookie(headers, SESSION_COOKIE)
}

/// Parse a specific cookie value from the Cookie header. Empty values count
/// as absent.
fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    for header_value in headers.get_all(header::COOKIE) {
        if let Ok(cookie_str) = header_value.to_str() {
            for piece in cookie_str.split(';') {
                if let Ok(c) = Cookie::parse_encoded(piece.trim().to_string()) {
                    if c.name() == name && !c.value().is_empty() {
                        return Some(c.value().to_string());
                    }
                }
            }
        }
    }
    None
}
