//! 会话认证模块
//!
//! - [`session`] - 会话令牌签发与校验
//! - [`extractor`] - 从 Cookie 中提取 [`SessionContext`]

pub mod extractor;
pub mod session;

pub use session::{SESSION_COOKIE, SessionClaims, SessionContext, SessionError, SessionService};
