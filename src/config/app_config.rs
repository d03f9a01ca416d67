// ==========================================
// 应急资源调度系统 - 应用配置
// ==========================================
// 职责: 日志级别、已知资源类型、默认种子数据
// 存储: JSON 文件 (缺失字段使用默认值)
// ==========================================

use crate::config::error::ConfigError;
use crate::config::seed::SeedData;
use crate::domain::types::Priority;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 默认日志级别
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// 默认已知资源类型
pub const DEFAULT_RESOURCE_TYPES: [&str; 3] = ["Ambulance", "Fire Truck", "Medical Team"];

// ==========================================
// AppConfig - 应用配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 日志级别过滤器（RUST_LOG 优先）
    pub log_level: String,

    /// 已知资源类型（控制台新增未知类型时需确认）
    pub known_resource_types: Vec<String>,

    /// 启动时载入的资源与事件
    pub seed: SeedData,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            known_resource_types: DEFAULT_RESOURCE_TYPES
                .iter()
                .map(|t| t.to_string())
                .collect(),
            seed: SeedData::default(),
        }
    }
}

impl AppConfig {
    /// 从 JSON 字符串解析并校验
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(raw).map_err(ConfigError::Json)?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件读取并校验
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置
    ///
    /// - 日志级别不能为空
    /// - 已知资源类型不能为空
    /// - 种子事件优先级必须是 High/Medium/Low
    /// - 种子资源类型不能为空
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("log_level 不能为空".to_string()));
        }

        if self.known_resource_types.iter().all(|t| t.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "known_resource_types 至少需要一个资源类型".to_string(),
            ));
        }

        for incident in &self.seed.incidents {
            if incident.priority.parse::<Priority>().is_err() {
                return Err(ConfigError::Invalid(format!(
                    "种子事件 {} 的优先级无效: '{}'",
                    incident.id, incident.priority
                )));
            }
        }

        for resource in &self.seed.resources {
            if resource.resource_type.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "种子资源类型不能为空 (location={})",
                    resource.location
                )));
            }
        }

        Ok(())
    }
}
