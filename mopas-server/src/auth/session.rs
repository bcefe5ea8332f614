//! 会话令牌服务
//!
//! The session is a signed HS256 JWT stored in the `mopas_session` cookie.
//! Its only payload is the member id; nothing about the session lives
//! server-side.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cookie carrying the session token
pub const SESSION_COOKIE: &str = "mopas_session";

const ISSUER: &str = "mopas-server";

/// The caller's identity for one request: authenticated as a member, or anonymous.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionContext {
    member_id: Option<i64>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self { member_id: None }
    }

    pub fn authenticated(member_id: i64) -> Self {
        Self {
            member_id: Some(member_id),
        }
    }

    pub fn member_id(&self) -> Option<i64> {
        self.member_id
    }

    pub fn is_authenticated(&self) -> bool {
        self.member_id.is_some()
    }

    /// Forget the identity. Calling this on an anonymous session is a no-op.
    pub fn clear(&mut self) {
        self.member_id = None;
    }
}

/// 存储在令牌中的 Claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Member ID (Subject)
    pub sub: String,
    /// 过期时间戳 (秒)
    pub exp: i64,
    /// 签发时间戳 (秒)
    pub iat: i64,
    /// 签发者
    pub iss: String,
}

/// 会话令牌错误
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("令牌已过期")]
    Expired,

    #[error("无效令牌: {0}")]
    Invalid(String),

    #[error("令牌生成失败: {0}")]
    GenerationFailed(String),
}

/// Issues and verifies session tokens with the configured secret key
#[derive(Clone)]
pub struct SessionService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for SessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl SessionService {
    pub fn new(secret: &str, ttl_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::minutes(ttl_minutes),
        }
    }

    /// Session lifetime, also used as the cookie Max-Age
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a token for an authenticated session
    pub fn issue(&self, member_id: i64) -> Result<String, SessionError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: member_id.to_string(),
            exp: (now + self.ttl).timestamp(),
            iat: now.timestamp(),
            iss: ISSUER.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| SessionError::GenerationFailed(e.to_string()))
    }

    /// Verify a token and return the session it stands for
    pub fn verify(&self, token: &str) -> Result<SessionContext, SessionError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[ISSUER]);
        validation.leeway = 0;

        let data = decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => SessionError::Expired,
                _ => SessionError::Invalid(e.to_string()),
            },
        )?;

        let member_id = data
            .claims
            .sub
            .parse::<i64>()
            .map_err(|_| SessionError::Invalid("subject is not a member id".into()))?;

        Ok(SessionContext::authenticated(member_id))
    }
}
