//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`layout`] - 布局读写接口
//! - [`room`] - 房间创建接口

pub mod health;
pub mod layout;
pub mod room;

pub mod router_ext;
pub use router_ext::{OneshotResult, OneshotRouter};

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(layout::router())
        .merge(room::router())
        .merge(health::router())
}

/// Build a fully configured application with all middleware and state
pub fn build_app(state: ServerState) -> Router {
    build_router()
        .with_state(state)
        // ========== Tower HTTP Middleware ==========
        // CORS - 固定放行所有来源（GUI 与服务端分端口部署）
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // HTTP 请求日志中间件
        .layer(middleware::from_fn(log_request))
}
