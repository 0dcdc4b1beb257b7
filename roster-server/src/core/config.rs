/// 服务器配置 - 员工档案后端的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | PORT | 5000 | HTTP 服务端口 |
/// | DATA_DIR | ./data | 嵌入式数据库目录 |
/// | STATIC_DIR | ./public | 预构建前端文件目录 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_DIR | (无) | 日志文件目录, 不设置则仅输出到终端 |
///
/// # 示例
///
/// ```ignore
/// DATA_DIR=/data/roster PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 数据目录，存储嵌入式数据库文件
    pub data_dir: String,
    /// 前端静态文件目录
    pub static_dir: String,
    /// 运行环境: development | production
    pub environment: String,
    /// 日志文件目录 (可选)
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".into()),
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "./public".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(data_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.data_dir = data_dir.into();
        config.http_port = http_port;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
