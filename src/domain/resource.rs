// ==========================================
// 应急资源调度系统 - 资源领域模型
// ==========================================

use crate::domain::types::ResourceHandle;
use serde::{Deserialize, Serialize};

// ==========================================
// Resource - 可调度资源
// ==========================================
// 用途: 救护车/消防车/医疗队等单个救援单元
// 红线: 只有 ResourceRegistry 的 allocate/free 可以改变 available
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,            // 资源ID (系统生成或人工指定, 不保证唯一)
    pub resource_type: String, // 资源类型 (精确匹配, 区分大小写)
    pub location: String,      // 所在位置 (仅展示, 不参与匹配)
    pub available: bool,       // 是否可用
}

impl Resource {
    /// 构造函数，新资源默认可用
    pub fn new(
        id: impl Into<String>,
        resource_type: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            resource_type: resource_type.into(),
            location: location.into(),
            available: true,
        }
    }

    /// 展示用状态文本
    pub fn status_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Assigned"
        }
    }
}

// ==========================================
// ResourceRef - 事件持有的资源引用
// ==========================================
// 非拥有引用: 资源本身仍归 ResourceRegistry 所有
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub handle: ResourceHandle,
    pub resource_id: String,
    pub resource_type: String,
}

impl ResourceRef {
    pub fn new(handle: ResourceHandle, resource: &Resource) -> Self {
        Self {
            handle,
            resource_id: resource.id.clone(),
            resource_type: resource.resource_type.clone(),
        }
    }
}
