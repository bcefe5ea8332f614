//! Cookie helpers
//!
//! Every cookie the server sets, removals included, is scoped to `/`,
//! `HttpOnly` and `SameSite=Lax`. Callers pass `secure` from
//! `Config::is_production`.

use axum::response::Response;
use chrono::Duration;
use cookie::{Cookie, SameSite};
use http::HeaderValue;
use http::header::SET_COOKIE;

use crate::auth::SESSION_COOKIE;

pub(crate) fn base_cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

/// Session cookie carrying a signed token; expires with the token
pub fn session_cookie(token: String, ttl: Duration, secure: bool) -> Cookie<'static> {
    let mut cookie = base_cookie(SESSION_COOKIE, token, secure);
    cookie.set_max_age(cookie::time::Duration::seconds(ttl.num_seconds()));
    cookie
}

/// A cookie that makes the browser drop `name`
pub fn removal_cookie(name: &'static str, secure: bool) -> Cookie<'static> {
    let mut cookie = base_cookie(name, String::new(), secure);
    cookie.make_removal();
    cookie
}

/// Append a `Set-Cookie` header to the response
pub fn append_cookie(response: &mut Response, cookie: &Cookie<'_>) {
    match HeaderValue::from_str(&cookie.to_string()) {
        Ok(value) => {
            response.headers_mut().append(SET_COOKIE, value);
        }
        Err(e) => {
            tracing::warn!(cookie = cookie.name(), "Dropping cookie with invalid header value: {e}");
        }
    }
}
