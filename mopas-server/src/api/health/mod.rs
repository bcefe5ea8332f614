//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /health | GET | 健康检查 (含数据库探测) | 无 |
//!
//! ```json
//! { "code": 0, "message": "OK", "data": { "status": "healthy", "version": "0.1.0", "database": { "status": "ok", "latency_ms": 0 } } }
//! ```

use axum::{Router, extract::State, routing::get};
use serde::Serialize;
use shared::error::ApiResponse;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// healthy | degraded
    status: &'static str,
    version: &'static str,
    database: CheckResult,
}

/// 单项检查结果
#[derive(Debug, Serialize)]
pub struct CheckResult {
    /// ok | error
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

pub async fn health(State(state): State<ServerState>) -> ApiResponse<HealthResponse> {
    let started = std::time::Instant::now();
    let database = match state.db.ping().await {
        Ok(()) => CheckResult {
            status: "ok",
            latency_ms: Some(started.elapsed().as_millis() as u64),
            message: None,
        },
        Err(e) => {
            tracing::warn!("Health check database probe failed: {}", e);
            CheckResult {
                status: "error",
                latency_ms: None,
                message: Some("database unavailable".into()),
            }
        }
    };

    ApiResponse::success(HealthResponse {
        status: if database.status == "ok" { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database,
    })
}
