//! Member Repository

use super::{RepoError, RepoResult};
use shared::models::{DashboardView, Member, MemberCreate};
use sqlx::SqlitePool;

const MEMBER_SELECT: &str = "SELECT id, first_name, second_name, last_name, email, group_code, contact, contribution, created_at FROM member";

/// Insert a new member. `contribution` takes the column default (0).
///
/// Uniqueness of email / group_code is left to the table's UNIQUE
/// constraints, so concurrent duplicates cannot both succeed.
pub async fn create(pool: &SqlitePool, data: &MemberCreate) -> RepoResult<Member> {
    let now = shared::util::now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO member (first_name, second_name, last_name, email, group_code, contact, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) RETURNING id",
    )
    .bind(&data.first_name)
    .bind(&data.second_name)
    .bind(&data.last_name)
    .bind(&data.email)
    .bind(&data.group_code)
    .bind(&data.contact)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database(format!("Member {id} vanished after insert")))
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Member>> {
    let sql = format!("{MEMBER_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Member>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Exact, case-sensitive match on both alternate keys
pub async fn find_by_credentials(
    pool: &SqlitePool,
    email: &str,
    group_code: &str,
) -> RepoResult<Option<Member>> {
    let sql = format!("{MEMBER_SELECT} WHERE email = ?1 AND group_code = ?2");
    let row = sqlx::query_as::<_, Member>(&sql)
        .bind(email)
        .bind(group_code)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_dashboard_view(pool: &SqlitePool, id: i64) -> RepoResult<Option<DashboardView>> {
    let row = sqlx::query_as::<_, DashboardView>(
        "SELECT first_name, contribution FROM member WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM member")
        .fetch_one(pool)
        .await?;
    Ok(n)
}
