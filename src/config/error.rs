// ==========================================
// 应急资源调度系统 - 配置层错误类型
// ==========================================

use std::path::PathBuf;
use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({}): {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件解析失败 ({}): {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("配置解析失败: {0}")]
    Json(#[source] serde_json::Error),

    #[error("配置校验失败: {0}")]
    Invalid(String),
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
