//! Roster Server - 员工档案管理后端
//!
//! # 架构概述
//!
//! - **HTTP API** (`api`): RESTful 接口，规范路由 (`/api/employees`) 与
//!   兼容别名路由 (`/api/employeelist`)
//! - **数据库** (`db`): 嵌入式 SurrealDB 文档存储
//! - **静态资源** (`services/frontend`): 预构建前端文件服务
//!
//! # 模块结构
//!
//! ```text
//! roster-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (模型 + 仓储)
//! ├── services/      # 静态前端服务
//! └── utils/         # 错误、日志、校验工具
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv + 日志)
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_dir = std::env::var("LOG_DIR").ok();
    let log_level = std::env::var("LOG_LEVEL").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____  ____  ___________________
   / __ \/ __ \/ ___/_  __/ ____/ __ \
  / /_/ / / / /\__ \ / / / __/ / /_/ /
 / _, _/ /_/ /___/ // / / /___/ _, _/
/_/ |_|\____//____//_/ /_____/_/ |_|
    "#
    );
}
