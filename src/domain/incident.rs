// ==========================================
// 应急资源调度系统 - 事件领域模型
// ==========================================
// 职责: 事件实体及其分配状态
// 红线: allocated_resources 数量不超过 required_resources
// ==========================================

use crate::domain::resource::ResourceRef;
use crate::domain::types::{IncidentStatus, Priority, UnknownPriority};
use serde::{Deserialize, Serialize};

// ==========================================
// Incident - 应急事件
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    // ===== 基本信息 =====
    pub id: String,             // 事件ID (注册表不校验唯一性)
    pub location: String,       // 事发地点
    pub emergency_type: String, // 事件类型
    pub priority: String,       // 优先级原始值, 须为 High/Medium/Low 之一

    // ===== 资源需求与分配 =====
    pub required_resources: Vec<String>,       // 所需资源类型, 可重复, 可为空
    pub allocated_resources: Vec<ResourceRef>, // 已分配资源 (按分配顺序)

    // ===== 状态 =====
    pub status: IncidentStatus,
}

impl Incident {
    /// 构造函数
    ///
    /// # 返回
    /// 状态为 Pending、未分配任何资源的事件
    pub fn new(
        id: impl Into<String>,
        location: impl Into<String>,
        emergency_type: impl Into<String>,
        priority: impl Into<String>,
        required_resources: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            location: location.into(),
            emergency_type: emergency_type.into(),
            priority: priority.into(),
            required_resources,
            allocated_resources: Vec::new(),
            status: IncidentStatus::Pending,
        }
    }

    /// 解析优先级
    pub fn parsed_priority(&self) -> Result<Priority, UnknownPriority> {
        self.priority.parse()
    }

    pub fn is_assigned(&self) -> bool {
        self.status == IncidentStatus::Assigned
    }

    /// 需求是否已全部满足
    pub fn is_fully_allocated(&self) -> bool {
        self.allocated_resources.len() == self.required_resources.len()
    }

    /// 尚未满足的需求（按 required_resources 顺序）
    ///
    /// 已分配资源按类型逐个抵扣需求, 剩下的即为待满足需求。
    /// 部分分配的事件在后续轮次只补齐这些需求。
    pub fn outstanding_demands(&self) -> Vec<&str> {
        let mut covered: Vec<&str> = self
            .allocated_resources
            .iter()
            .map(|r| r.resource_type.as_str())
            .collect();
        let mut outstanding = Vec::new();
        for required in &self.required_resources {
            match covered.iter().position(|t| *t == required.as_str()) {
                Some(pos) => {
                    covered.swap_remove(pos);
                }
                None => outstanding.push(required.as_str()),
            }
        }
        outstanding
    }

    /// 已分配资源ID（逗号分隔, 无分配时为 "None"）
    pub fn allocated_summary(&self) -> String {
        if self.allocated_resources.is_empty() {
            return "None".to_string();
        }
        self.allocated_resources
            .iter()
            .map(|r| r.resource_id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
