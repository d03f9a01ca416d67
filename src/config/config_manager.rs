// ==========================================
// 应急资源调度系统 - 配置管理器
// ==========================================
// 职责: 定位并加载配置文件
// 查找顺序: 命令行路径 -> 环境变量 -> 用户配置目录 -> 内置默认值
// ==========================================

use crate::config::app_config::AppConfig;
use crate::config::error::ConfigResult;
use std::path::{Path, PathBuf};
use tracing::info;

/// 配置文件路径环境变量
pub const CONFIG_ENV_VAR: &str = "EMERGENCY_DISPATCH_CONFIG";

/// 用户配置目录下的应用目录名
pub const APP_DIR_NAME: &str = "emergency-dispatch";

/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "config.json";

/// 配置来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: AppConfig,
    source: ConfigSource,
}

impl ConfigManager {
    /// 按查找顺序加载配置
    ///
    /// # 参数
    /// - `explicit`: 命令行指定的配置文件路径
    ///
    /// # 返回
    /// - Ok: 找到文件则读取文件, 否则使用内置默认值
    /// - Err: 文件存在但读取/解析/校验失败
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        let env_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        let path = resolve_config_path(explicit, env_path, default_config_path());
        Self::load_from(path)
    }

    /// 从指定路径加载（None 表示使用默认值）
    pub fn load_from(path: Option<PathBuf>) -> ConfigResult<Self> {
        match path {
            Some(path) => {
                let config = AppConfig::from_file(&path)?;
                info!("使用配置文件: {}", path.display());
                Ok(Self {
                    config,
                    source: ConfigSource::File(path),
                })
            }
            None => {
                info!("未找到配置文件, 使用内置默认配置");
                Ok(Self::defaults())
            }
        }
    }

    /// 内置默认配置
    pub fn defaults() -> Self {
        Self {
            config: AppConfig::default(),
            source: ConfigSource::Defaults,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    pub fn into_config(self) -> AppConfig {
        self.config
    }
}

/// 用户配置目录下的默认配置文件路径
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// 决定使用哪个配置文件
///
/// 命令行与环境变量指定的路径总是被采用（不存在时由加载报错）;
/// 默认路径只在文件存在时采用
pub fn resolve_config_path(
    explicit: Option<&Path>,
    env_path: Option<PathBuf>,
    default_path: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env_path.filter(|p| !p.as_os_str().is_empty()) {
        return Some(path);
    }
    default_path.filter(|p| p.is_file())
}
