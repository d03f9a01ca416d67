// ==========================================
// 应急资源调度系统 - 注册表层
// ==========================================
// 职责: 独占持有资源与事件集合, 提供查询与状态变更
// 红线: 只在内存中, 无持久化
// ==========================================

pub mod incident_registry;
pub mod resource_registry;

pub use incident_registry::IncidentRegistry;
pub use resource_registry::ResourceRegistry;
