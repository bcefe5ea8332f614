//! Registry operations against SQLite

use mopas_server::db::DbService;
use mopas_server::db::repository::member;
use mopas_server::{MembershipRegistry, SessionContext};
use shared::error::ErrorCode;
use shared::models::{Contribution, MemberCreate};

async fn setup() -> (DbService, MembershipRegistry) {
    let db = DbService::new("sqlite::memory:").await.unwrap();
    let registry = MembershipRegistry::new(db.pool.clone());
    (db, registry)
}

fn form(email: &str, group_code: &str) -> MemberCreate {
    MemberCreate {
        first_name: "Ada".into(),
        second_name: None,
        last_name: "Lovelace".into(),
        email: email.into(),
        group_code: group_code.into(),
        contact: "0700000000".into(),
    }
}

async fn count(db: &DbService) -> i64 {
    member::count(&db.pool).await.unwrap()
}

#[tokio::test]
async fn register_assigns_id_and_zero_contribution() {
    let (db, registry) = setup().await;

    let created = registry
        .register(form("ada@example.com", "mopas532J"))
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.contribution, Contribution::ZERO);
    assert_eq!(created.second_name, None);
    assert!(created.created_at > 0);
    assert_eq!(count(&db).await, 1);
}

#[tokio::test]
async fn group_code_threshold_is_enforced() {
    let (db, registry) = setup().await;

    let err = registry
        .register(form("a@example.com", "mopas499J"))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidGroupCode);

    registry.register(form("b@example.com", "mopas500J")).await.unwrap();
    registry.register(form("c@example.com", "mopas1000J")).await.unwrap();
    assert_eq!(count(&db).await, 2);
}

#[tokio::test]
async fn malformed_email_is_rejected() {
    let (db, registry) = setup().await;

    for email in ["a@b", "a.com", ""] {
        let err = registry.register(form(email, "mopas600J")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidEmail, "email {email:?}");
    }
    assert_eq!(count(&db).await, 0);
}

#[tokio::test]
async fn group_code_is_checked_first() {
    let (_db, registry) = setup().await;
    let err = registry.register(form("bad", "bad")).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidGroupCode);
}

#[tokio::test]
async fn blank_required_field_is_rejected() {
    let (db, registry) = setup().await;
    let mut input = form("ada@example.com", "mopas532J");
    input.last_name = "   ".into();

    let err = registry.register(input).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::RequiredField);
    assert_eq!(count(&db).await, 0);
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let (db, registry) = setup().await;
    registry.register(form("ada@example.com", "mopas532J")).await.unwrap();

    let err = registry
        .register(form("ada@example.com", "mopas600J"))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::DuplicateIdentity);
    assert_eq!(err.message, "Email already exists.");
    assert_eq!(err.details.unwrap().get("field").unwrap(), "email");
    assert_eq!(count(&db).await, 1);
}

#[tokio::test]
async fn duplicate_group_code_is_rejected() {
    let (db, registry) = setup().await;
    registry.register(form("ada@example.com", "mopas532J")).await.unwrap();

    let err = registry
        .register(form("grace@example.com", "mopas532J"))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::DuplicateIdentity);
    assert_eq!(err.message, "Group code already exists.");
    assert_eq!(count(&db).await, 1);
}

#[tokio::test]
async fn concurrent_duplicates_store_one_row() {
    // File database: the pool holds several connections, so the inserts race
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("mopas.db").display());
    let db = DbService::new(&url).await.unwrap();
    let registry = MembershipRegistry::new(db.pool.clone());

    let tasks: Vec<_> = ["mopas532J", "mopas600J", "mopas777J", "mopas999J"]
        .into_iter()
        .map(|code| {
            let registry = registry.clone();
            tokio::spawn(async move { registry.register(form("ada@example.com", code)).await })
        })
        .collect();

    let mut created = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => created += 1,
            Err(e) => assert_eq!(e.code, ErrorCode::DuplicateIdentity),
        }
    }
    assert_eq!(created, 1);
    assert_eq!(count(&db).await, 1);
}

#[tokio::test]
async fn fields_are_trimmed_before_storage() {
    let (_db, registry) = setup().await;
    let input = MemberCreate {
        first_name: "  Ada  ".into(),
        second_name: Some("  ".into()),
        last_name: " Lovelace ".into(),
        email: " ada@example.com ".into(),
        group_code: " mopas532J ".into(),
        contact: " 0700 ".into(),
    };

    let created = registry.register(input).await.unwrap();
    assert_eq!(created.first_name, "Ada");
    assert_eq!(created.second_name, None);
    assert_eq!(created.email, "ada@example.com");
    assert_eq!(created.group_code, "mopas532J");
    assert_eq!(created.contact, "0700");

    // 登录输入同样去除空白
    let session = registry.login(" ada@example.com", "mopas532J ").await.unwrap();
    assert_eq!(session.member_id(), Some(created.id));
}

#[tokio::test]
async fn login_requires_exact_pair() {
    let (_db, registry) = setup().await;
    let created = registry
        .register(form("ada@example.com", "mopas532J"))
        .await
        .unwrap();
    registry
        .register(form("grace@example.com", "mopas600J"))
        .await
        .unwrap();

    let session = registry.login("ada@example.com", "mopas532J").await.unwrap();
    assert!(session.is_authenticated());
    assert_eq!(session.member_id(), Some(created.id));

    for (email, code) in [
        ("ada@example.com", "mopas600J"),
        ("grace@example.com", "mopas532J"),
        ("nobody@example.com", "mopas532J"),
        ("ADA@example.com", "mopas532J"),
        ("ada@example.com", "mopas532j"),
    ] {
        let err = registry.login(email, code).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCredentials, "{email} / {code}");
        assert_eq!(err.message, ErrorCode::InvalidCredentials.message());
    }
}

#[tokio::test]
async fn dashboard_requires_login() {
    let (_db, registry) = setup().await;
    registry.register(form("ada@example.com", "mopas532J")).await.unwrap();

    let err = registry
        .dashboard(&SessionContext::anonymous())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::NotAuthenticated);

    let session = registry.login("ada@example.com", "mopas532J").await.unwrap();
    let view = registry.dashboard(&session).await.unwrap();
    assert_eq!(view.first_name, "Ada");
    assert_eq!(view.contribution.percent(), 0);
}

#[tokio::test]
async fn dashboard_for_missing_member() {
    let (db, registry) = setup().await;
    let created = registry
        .register(form("ada@example.com", "mopas532J"))
        .await
        .unwrap();
    let session = registry.login("ada@example.com", "mopas532J").await.unwrap();

    sqlx::query("DELETE FROM member WHERE id = ?")
        .bind(created.id)
        .execute(&db.pool)
        .await
        .unwrap();

    let err = registry.dashboard(&session).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::MemberNotFound);
}

#[tokio::test]
async fn contribution_stays_in_range() {
    let (db, registry) = setup().await;
    let created = registry
        .register(form("ada@example.com", "mopas532J"))
        .await
        .unwrap();

    for value in [-1_i64, 101] {
        let result = sqlx::query("UPDATE member SET contribution = ? WHERE id = ?")
            .bind(value)
            .bind(created.id)
            .execute(&db.pool)
            .await;
        assert!(result.is_err(), "contribution {value} was accepted");
    }

    sqlx::query("UPDATE member SET contribution = 100 WHERE id = ?")
        .bind(created.id)
        .execute(&db.pool)
        .await
        .unwrap();
    let session = SessionContext::authenticated(created.id);
    let view = registry.dashboard(&session).await.unwrap();
    assert_eq!(view.contribution.percent(), 100);
}

#[tokio::test]
async fn logout_is_idempotent() {
    let (_db, registry) = setup().await;
    registry.register(form("ada@example.com", "mopas532J")).await.unwrap();
    let mut session = registry.login("ada@example.com", "mopas532J").await.unwrap();

    registry.logout(&mut session);
    assert!(!session.is_authenticated());
    registry.logout(&mut session);
    assert_eq!(session, SessionContext::anonymous());

    let err = registry.dashboard(&session).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::NotAuthenticated);
}
