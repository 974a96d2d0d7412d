//! 统一错误处理
//!
//! 存储层错误经 [`From<StoreError>`] 统一转换为 [`AppError`]，
//! 再由 [`IntoResponse`] 映射为状态码加纯文本消息的响应。
//!
//! # 状态码映射
//!
//! | 分类 | 状态码 |
//! |------|--------|
//! | NotFound | 404 |
//! | Conflict | 409 |
//! | Validation | 400 |
//! | Unprocessable | 422 |
//! | Storage / Internal | 500 |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::store::StoreError;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 业务逻辑错误 (4xx) ==========
    #[error("Resource not found: {0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("Resource already exists: {0}")]
    /// 资源冲突 (409)
    Conflict(String),

    #[error("Validation failed: {0}")]
    /// 验证失败 (400)
    Validation(String),

    #[error("Unprocessable payload: {0}")]
    /// 载荷形状不可处理 (422)
    Unprocessable(String),

    // ========== 系统错误 (5xx) ==========
    #[error("Storage error: {0}")]
    /// 存储错误 (500)
    Storage(String),

    #[error("Internal server error: {0}")]
    /// 内部错误 (500)
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),

            // 5xx: 记录详细原因，对外只回泛化消息
            AppError::Storage(msg) => {
                error!(target: "store", error = %msg, "Layout store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Layout store error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(name) => Self::NotFound(format!("Room {} not found", name)),
            StoreError::Conflict(name) => {
                Self::Conflict(format!("Room with name {} already exists", name))
            }
            StoreError::InvalidArgument(msg) => Self::Validation(msg),
            StoreError::Unprocessable(name) => {
                Self::Unprocessable(format!("Layout for room {} is missing tables", name))
            }
            StoreError::Unavailable(msg) => Self::Storage(msg),
        }
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
