// ==========================================
// 应急资源调度系统 - 领域类型定义
// ==========================================
// 职责: 优先级、事件状态、资源句柄
// 红线: 优先级只有三档, 不做评分制
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ==========================================
// 事件优先级 (Priority)
// ==========================================
// 顺序: High < Medium < Low (排序时 High 在前)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,   // 高
    Medium, // 中
    Low,    // 低
}

impl Priority {
    /// 全部优先级（按排序先后）
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// 排序秩: High=0, Medium=1, Low=2
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    /// 转换为字符串标识
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 无法识别的优先级字符串
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("未知优先级: '{0}' (可选: High/Medium/Low)")]
pub struct UnknownPriority(pub String);

impl FromStr for Priority {
    type Err = UnknownPriority;

    /// 精确匹配（区分大小写）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| UnknownPriority(s.to_string()))
    }
}

// ==========================================
// 事件状态 (Incident Status)
// ==========================================
// 状态流转: Pending -> Assigned, 不可回退
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IncidentStatus {
    #[default]
    Pending,  // 待分配（含部分分配）
    Assigned, // 所需资源已全部分配
}

impl IncidentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentStatus::Pending => "Pending",
            IncidentStatus::Assigned => "Resources have now been assigned",
        }
    }
}

impl fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==========================================
// 资源句柄 (Resource Handle)
// ==========================================
// 资源在 ResourceRegistry 中的插入下标
// 资源不会被删除, 句柄在注册表生命周期内始终有效
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ResourceHandle(pub(crate) usize);

impl ResourceHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
