use thiserror::Error;

/// 服务器生命周期错误 (绑定、监听失败等)
///
/// 请求级错误使用 [`crate::utils::AppError`]
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("内部服务器错误")]
    Internal(#[from] anyhow::Error),
}

/// `Server::run` 的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
