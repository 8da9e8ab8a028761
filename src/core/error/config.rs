//! 配置错误类型
//!
//! 涵盖配置文件读写和校验相关的错误

use thiserror::Error;

/// 配置操作结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;

/// 配置相关错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读写失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置文件解析失败: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("配置序列化失败: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("配置校验失败: {0}")]
    Validation(String),
}
