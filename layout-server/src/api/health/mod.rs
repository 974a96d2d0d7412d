//! 健康检查路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 服务与存储健康检查 |
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0",
//!   "uptime_seconds": 42,
//!   "store": { "status": "ok", "room_count": 3 }
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// 健康检查路由 - 公共路由
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
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
    /// 存储检查结果
    store: CheckResult,
}

/// 单项检查结果
#[derive(Serialize)]
pub struct CheckResult {
    /// 状态 (ok | error)
    status: &'static str,
    /// 房间数量
    #[serde(skip_serializing_if = "Option::is_none")]
    room_count: Option<usize>,
    /// 错误信息
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl CheckResult {
    fn ok(room_count: usize) -> Self {
        Self {
            status: "ok",
            room_count: Some(room_count),
            message: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            room_count: None,
            message: Some(message.into()),
        }
    }
}

/// 基础健康检查：验证布局文档可读
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let store_check = match state.store().list_rooms().await {
        Ok(rooms) => CheckResult::ok(rooms.len()),
        Err(e) => CheckResult::error(e.to_string()),
    };

    let status = if store_check.status == "ok" {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.uptime_seconds(),
        store: store_check,
    })
}
