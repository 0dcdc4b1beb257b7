//! 统一错误处理
//!
//! 提供应用级错误类型和响应结构：
//! - [`AppError`] - 应用错误枚举
//! - [`AppResponse`] - 规范路由的响应包装
//!
//! # 状态码映射
//!
//! | 错误 | 状态码 |
//! |------|--------|
//! | Validation / ValidationErrors | 400 |
//! | NotFound | 404 |
//! | Database / Internal | 500 |
//!
//! 500 响应的 message 仅在 development 环境携带底层细节
//! (开关在启动时由 [`set_error_verbosity`] 设置一次)，
//! 细节本身始终通过 tracing 记录。
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::not_found("Employee not found"))
//!
//! // 返回成功响应
//! Ok(ok(data))
//! ```

use std::sync::OnceLock;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::db::repository::RepoError;

// 500 响应是否携带底层错误信息 (启动时根据环境设置一次)
static VERBOSE_ERRORS: OnceLock<bool> = OnceLock::new();

/// Set once at startup from `Config`; later calls are ignored
pub fn set_error_verbosity(verbose: bool) {
    let _ = VERBOSE_ERRORS.set(verbose);
}

fn verbose_errors() -> bool {
    *VERBOSE_ERRORS.get().unwrap_or(&false)
}

/// 规范路由的响应包装
///
/// ```json
/// {
///   "success": true,
///   "count": 3,
///   "message": "Employee created successfully",
///   "data": { ... }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppResponse<T> {
    /// 是否成功
    pub success: bool,
    /// 列表响应的记录数
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// 可选消息
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// 响应数据
    pub data: T,
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<String>>,
}

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 业务逻辑错误 (4xx) ==========
    #[error("Validation failed: {0}")]
    /// 验证失败 (400)
    Validation(String),

    #[error("Validation failed")]
    /// 验证失败, 逐字段消息 (400)
    ValidationErrors(Vec<String>),

    #[error("Resource not found: {0}")]
    /// 资源不存在 (404)
    NotFound(String),

    // ========== 系统错误 (5xx) ==========
    #[error("Database error: {0}")]
    /// 数据库错误 (500)
    Database(String),

    #[error("Internal server error: {0}")]
    /// 内部错误 (500)
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg, None),

            AppError::ValidationErrors(errs) => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                Some(errs),
            ),

            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),

            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                let message = if verbose_errors() {
                    msg
                } else {
                    "Database error".to_string()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message, None)
            }

            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                let message = if verbose_errors() {
                    msg
                } else {
                    "Internal server error".to_string()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message, None)
            }
        };

        let body = Json(ErrorBody {
            success: false,
            message,
            errors,
        });

        (status, body).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn validation_errors(errors: Vec<String>) -> Self {
        Self::ValidationErrors(errors)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

// ========== Helper functions ==========

/// Create a successful response
pub fn ok<T: Serialize>(data: T) -> Json<AppResponse<T>> {
    Json(AppResponse {
        success: true,
        count: None,
        message: None,
        data,
    })
}

/// Create a successful list response carrying the record count
pub fn ok_with_count<T: Serialize>(data: T, count: usize) -> Json<AppResponse<T>> {
    Json(AppResponse {
        success: true,
        count: Some(count),
        message: None,
        data,
    })
}

/// Create a successful response with custom message
pub fn ok_with_message<T: Serialize>(data: T, message: impl Into<String>) -> Json<AppResponse<T>> {
    Json(AppResponse {
        success: true,
        count: None,
        message: Some(message.into()),
        data,
    })
}
