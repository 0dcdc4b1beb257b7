//! 健康检查路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/health | GET | 健康检查 (含数据库连通性) |
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0",
//!   "uptime_seconds": 42,
//!   "database": { "status": "ok", "latency_ms": 1 }
//! }
//! ```

use std::time::SystemTime;

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// 健康检查路由 - 公共路由
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(health))
}

/// 健康检查响应
#[derive(Serialize)]
pub struct HealthResponse {
    /// 状态 (healthy | degraded)
    status: &'static str,
    /// 版本号
    version: &'static str,
    /// 运行时间 (秒)
    uptime_seconds: u64,
    /// 数据库检查结果
    database: CheckResult,
}

/// 单项检查结果
#[derive(Serialize)]
pub struct CheckResult {
    /// 状态 (ok | error)
    status: &'static str,
    /// 延迟 (毫秒)
    #[serde(skip_serializing_if = "Option::is_none")]
    latency_ms: Option<u64>,
    /// 错误信息
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl CheckResult {
    fn ok_with_latency(latency_ms: u64) -> Self {
        Self {
            status: "ok",
            latency_ms: Some(latency_ms),
            message: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            latency_ms: None,
            message: Some(message.into()),
        }
    }
}

// 服务器启动时间 (懒加载静态变量)
static START_TIME: std::sync::OnceLock<SystemTime> = std::sync::OnceLock::new();

fn get_uptime_seconds() -> u64 {
    let start = START_TIME.get_or_init(SystemTime::now);
    SystemTime::now()
        .duration_since(*start)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// 健康检查 - 用简单查询验证数据库连接
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let db_start = std::time::Instant::now();
    let database = match state.db.query("RETURN 1").await {
        Ok(_) => CheckResult::ok_with_latency(db_start.elapsed().as_millis() as u64),
        Err(e) => CheckResult::error(format!("Database error: {}", e)),
    };

    let status = if database.status == "ok" {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: get_uptime_seconds(),
        database,
    })
}
