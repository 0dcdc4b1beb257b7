use std::path::{Path, PathBuf};

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::error::set_error_verbosity;

/// 服务器状态 - 持有配置与数据库句柄
///
/// ServerState 通过 axum `State` 在所有 handler 之间共享。
/// `Surreal<Db>` 内部为 Arc，克隆成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 方法代替
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        Self { config, db }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 数据目录 (确保存在)
    /// 2. 错误详情开关 (development 下 500 响应携带详细信息)
    /// 3. 数据库 (data_dir/roster.db)
    ///
    /// # Panics
    ///
    /// 数据库初始化失败时 panic (启动失败即退出进程)
    pub async fn initialize(config: &Config) -> Self {
        std::fs::create_dir_all(&config.data_dir).expect("Failed to create data directory");

        set_error_verbosity(config.is_development());

        let db_service = DbService::new(Path::new(&config.data_dir))
            .await
            .expect("Failed to initialize database");

        Self::new(config.clone(), db_service.db)
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// 前端静态文件目录
    pub fn static_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.static_dir)
    }
}
