//! Session Extractor
//!
//! Resolves the caller's [`SessionContext`] from the session cookie.
//! Never rejects: a missing, expired or forged cookie yields an anonymous
//! session, and the handlers decide what anonymous callers may do.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use cookie::Cookie;

use crate::auth::{SESSION_COOKIE, SessionContext, SessionError};
use crate::core::ServerState;
use crate::security_log;

impl FromRequestParts<ServerState> for SessionContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // Check if already extracted
        if let Some(session) = parts.extensions.get::<SessionContext>() {
            return Ok(*session);
        }

        let Some(token) = session_token(parts) else {
            return Ok(SessionContext::anonymous());
        };

        let session = match state.sessions.verify(&token) {
            Ok(session) => session,
            Err(SessionError::Expired) => {
                tracing::debug!(uri = %parts.uri, "Session cookie expired");
                SessionContext::anonymous()
            }
            Err(e) => {
                security_log!(
                    "WARN",
                    "session_rejected",
                    error = format!("{}", e),
                    uri = format!("{:?}", parts.uri)
                );
                SessionContext::anonymous()
            }
        };

        parts.extensions.insert(session);
        Ok(session)
    }
}

/// Value of the session cookie, if the request carries one
fn session_token(parts: &Parts) -> Option<String> {
    read_cookie(parts, SESSION_COOKIE)
}

/// Find a cookie by name across every `Cookie` header of the request
pub(crate) fn read_cookie(parts: &Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get_all(http::header::COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| Cookie::split_parse(h))
        .filter_map(Result::ok)
        .find(|c| c.name() == name)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Request;

    fn parts_with_cookies(values: &[&str]) -> Parts {
        let mut builder = Request::builder().uri("/dashboard");
        for v in values {
            builder = builder.header(http::header::COOKIE, *v);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_read_cookie_among_several() {
        let parts = parts_with_cookies(&["theme=dark; mopas_session=abc.def.ghi"]);
        assert_eq!(read_cookie(&parts, SESSION_COOKIE).as_deref(), Some("abc.def.ghi"));
        assert_eq!(read_cookie(&parts, "theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_read_cookie_multiple_headers() {
        let parts = parts_with_cookies(&["a=1", "mopas_session=tok"]);
        assert_eq!(read_cookie(&parts, SESSION_COOKIE).as_deref(), Some("tok"));
    }

    #[test]
    fn test_read_cookie_missing_or_empty() {
        let parts = parts_with_cookies(&["mopas_session="]);
        assert_eq!(read_cookie(&parts, SESSION_COOKIE), None);
        let parts = parts_with_cookies(&[]);
        assert_eq!(read_cookie(&parts, SESSION_COOKIE), None);
    }
}
