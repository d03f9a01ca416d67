// ==========================================
// 应急资源调度系统 - 配置层
// ==========================================
// 职责: 应用配置与种子数据的加载、校验
// 存储: JSON 配置文件 (可选)
// ==========================================

pub mod app_config;
pub mod config_manager;
pub mod error;
pub mod seed;

// 重导出核心配置类型
pub use app_config::AppConfig;
pub use config_manager::{ConfigManager, ConfigSource, CONFIG_ENV_VAR};
pub use error::{ConfigError, ConfigResult};
pub use seed::{IncidentSeed, ResourceSeed, SeedData};
