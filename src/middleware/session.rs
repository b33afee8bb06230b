use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Cookie carrying the session id
pub const SESSION_COOKIE: &str = "gamepick_session";

/// Extension type holding the request's resolved session id
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionId(pub Uuid);

/// Middleware that resolves the client's session id and stores it in the
/// request extensions.
///
/// Reuses the id from the session cookie when it parses as a UUID; otherwise
/// a fresh id is generated and the cookie is set on the response.
pub async fn session_middleware(mut request: Request, next: Next) -> Response {
    let existing = request
        .headers()
        .get(header::COOKIE)
        .and_then(|header| header.to_str().ok())
        .and_then(|cookies| cookie_value(cookies, SESSION_COOKIE))
        .and_then(|value| Uuid::parse_str(value).ok());

    let session_id = existing.unwrap_or_else(Uuid::new_v4);

    // Store in request extensions for handlers to access
    request.extensions_mut().insert(SessionId(session_id));

    let mut response = next.run(request).await;

    // Only set the cookie when the client did not present a usable one
    if existing.is_none() {
        let cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            SESSION_COOKIE, session_id
        );
        if let Ok(header_value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(header::SET_COOKIE, header_value);
        }
    }

    response
}

/// Finds a cookie's value within a Cookie header
fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then_some(value.trim())
    })
}
