//! MOPAS Server - 会员注册与登录服务
//!
//! # 架构概述
//!
//! - **注册中心** (`registry`): 注册、登录、仪表盘查询、退出
//! - **数据库** (`db`): SQLite (sqlx) 连接池、迁移和 repository
//! - **认证** (`auth`): 签名会话 Cookie (JWT)
//! - **页面** (`web`, `api`): askama 模板、提示消息、路由
//!
//! # 模块结构
//!
//! ```text
//! mopas-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── registry/      # 会员业务逻辑和输入校验
//! ├── auth/          # 会话令牌和提取器
//! ├── db/            # 数据库层
//! ├── web/           # 模板、Flash、Cookie
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod registry;
pub mod utils;
pub mod web;

// Re-export 公共类型
pub use auth::{SessionContext, SessionService};
pub use core::{Config, Server, ServerError, ServerState};
pub use registry::MembershipRegistry;
pub use shared::error::{AppError, AppResult, ErrorCode};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Initialize logging from the loaded configuration
pub fn setup_environment(config: &Config) {
    utils::init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
    __  _______  ____  ___   _____
   /  |/  / __ \/ __ \/   | / ___/
  / /|_/ / / / / /_/ / /| | \__ \
 / /  / / /_/ / ____/ ___ |___/ /
/_/  /_/\____/_/   /_/  |_/____/
    "#
    );
}
