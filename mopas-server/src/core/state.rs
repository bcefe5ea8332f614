use std::sync::Arc;

use anyhow::Context;

use crate::auth::SessionService;
use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::registry::MembershipRegistry;

/// 服务器状态 - 持有所有服务的共享引用
///
/// Built once at startup from [`Config`] and cloned into every handler.
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Arc<Config> | 配置项 (不可变) |
/// | db | DbService | SQLite 连接池 |
/// | registry | MembershipRegistry | 会员注册/登录 |
/// | sessions | Arc<SessionService> | 会话令牌 |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub db: DbService,
    pub registry: MembershipRegistry,
    pub sessions: Arc<SessionService>,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        let sessions = SessionService::new(&config.secret_key, config.session_ttl_minutes);
        let registry = MembershipRegistry::new(db.pool.clone());
        Self {
            config: Arc::new(config),
            db,
            registry,
            sessions: Arc::new(sessions),
        }
    }

    /// Open the database (applying migrations) and wire up the services
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_url)
            .await
            .context("Failed to open database")
            .map_err(ServerError::Internal)?;

        tracing::info!(
            environment = %config.environment,
            session_ttl_minutes = config.session_ttl_minutes,
            "Server state initialized"
        );

        Ok(Self::new(config.clone(), db))
    }
}
