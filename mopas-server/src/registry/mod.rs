//! Membership Registry
//!
//! The four member operations: register, login, dashboard lookup and logout.
//! Each one validates its input, touches the `member` table at most once and
//! returns either a result or an [`AppError`] carrying one of the registry
//! error codes. The caller's session is always passed in explicitly.

pub mod validation;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{DashboardView, Member, MemberCreate};
use sqlx::SqlitePool;

use crate::auth::SessionContext;
use crate::db::repository::member;
use crate::security_log;

pub use validation::{is_valid_email, is_valid_group_code, validate_registration};

#[derive(Clone, Debug)]
pub struct MembershipRegistry {
    pool: SqlitePool,
}

impl MembershipRegistry {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Register a new member.
    ///
    /// Fields are trimmed, then checked in order (group code, email, required
    /// fields); the insert itself rejects a taken email or group code. No row
    /// is written on any failure.
    pub async fn register(&self, form: MemberCreate) -> AppResult<Member> {
        let form = form.normalized();
        validate_registration(&form)?;

        let member = member::create(&self.pool, &form).await.map_err(|e| {
            let err = AppError::from(e);
            if err.code == ErrorCode::DuplicateIdentity {
                tracing::info!(
                    email = %form.email,
                    group_code = %form.group_code,
                    "Registration rejected: {}",
                    err.message
                );
            }
            err
        })?;

        tracing::info!(member_id = member.id, email = %member.email, "Member registered");
        Ok(member)
    }

    /// Authenticate by exact (email, group code) match.
    ///
    /// An unknown email and a wrong group code produce the same error.
    pub async fn login(&self, email: &str, group_code: &str) -> AppResult<SessionContext> {
        let email = email.trim();
        let group_code = group_code.trim();

        match member::find_by_credentials(&self.pool, email, group_code).await? {
            Some(found) => {
                tracing::info!(member_id = found.id, "Member logged in");
                Ok(SessionContext::authenticated(found.id))
            }
            None => {
                security_log!("WARN", "login_failed", email = email);
                Err(AppError::invalid_credentials())
            }
        }
    }

    /// First name and contribution of the logged-in member
    pub async fn dashboard(&self, session: &SessionContext) -> AppResult<DashboardView> {
        let member_id = session.member_id().ok_or_else(AppError::not_authenticated)?;

        member::find_dashboard_view(&self.pool, member_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(member_id, "Session refers to a missing member");
                AppError::new(ErrorCode::MemberNotFound).with_detail("member_id", member_id)
            })
    }

    /// End the session. Idempotent, no storage access.
    pub fn logout(&self, session: &mut SessionContext) {
        if let Some(member_id) = session.member_id() {
            tracing::info!(member_id, "Member logged out");
        }
        session.clear();
    }
}
