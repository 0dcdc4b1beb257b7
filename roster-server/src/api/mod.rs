//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`employees`] - 员工管理接口 (规范路由, 带响应包装)
//! - [`employee_list`] - 员工列表兼容接口 (裸响应, 供预构建前端使用)

pub mod employee_list;
pub mod employees;
pub mod health;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};
