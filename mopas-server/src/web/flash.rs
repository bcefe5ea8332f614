//! Flash messages
//!
//! One-shot notices carried across redirects in the `mopas_flash` cookie,
//! stored as URL-safe base64 of a JSON array. Messages pile up across
//! consecutive redirects until a rendered page shows them all and removes
//! the cookie.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::auth::extractor::read_cookie;
use crate::core::ServerState;
use crate::web::cookies::{append_cookie, base_cookie, removal_cookie};

pub const FLASH_COOKIE: &str = "mopas_flash";

/// Oldest messages are dropped beyond this, keeping the cookie small
const MAX_MESSAGES: usize = 5;

/// Pending flash messages of this request, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flash {
    messages: Vec<String>,
    secure: bool,
}

impl Flash {
    pub fn new(messages: Vec<String>, secure: bool) -> Self {
        Self { messages, secure }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_present(&self) -> bool {
        !self.messages.is_empty()
    }

    /// Queue another message behind the pending ones
    pub fn push(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        if self.messages.len() > MAX_MESSAGES {
            let excess = self.messages.len() - MAX_MESSAGES;
            self.messages.drain(..excess);
        }
        self
    }

    /// 303 redirect to `to`, carrying every pending message
    pub fn redirect(self, to: &str) -> Response {
        let mut response = Redirect::to(to).into_response();
        if self.is_present() {
            let cookie = base_cookie(FLASH_COOKIE, encode(&self.messages), self.secure);
            append_cookie(&mut response, &cookie);
        }
        response
    }

    /// Remove the flash cookie once its messages have been shown
    pub fn consume(&self, response: &mut Response) {
        if self.is_present() {
            append_cookie(response, &removal_cookie(FLASH_COOKIE, self.secure));
        }
    }
}

impl FromRequestParts<ServerState> for Flash {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let messages = read_cookie(parts, FLASH_COOKIE)
            .map(|v| decode(&v))
            .unwrap_or_default();
        Ok(Flash::new(messages, state.config.is_production()))
    }
}

pub fn encode(messages: &[String]) -> String {
    // Vec<String> always serializes
    let json = serde_json::to_vec(messages).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

/// Undecodable values yield no messages
pub fn decode(value: &str) -> Vec<String> {
    URL_SAFE_NO_PAD
        .decode(value)
        .ok()
        .and_then(|bytes| serde_json::from_slice::<Vec<String>>(&bytes).ok())
        .unwrap_or_default()
        .into_iter()
        .filter(|m| !m.is_empty())
        .collect()
}
