use thiserror::Error;

/// 服务器启动/运行错误
///
/// Request-level failures use [`shared::error::AppError`]; this type only
/// covers configuration and lifecycle problems.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("端口绑定失败: {0}")]
    Bind(#[source] std::io::Error),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

/// 服务器 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
