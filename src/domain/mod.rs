// ==========================================
// 应急资源调度系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含注册表逻辑, 不含分配引擎逻辑, 不做 I/O
// ==========================================

pub mod incident;
pub mod resource;
pub mod types;

// 重导出核心类型
pub use incident::Incident;
pub use resource::{Resource, ResourceRef};
pub use types::{IncidentStatus, Priority, ResourceHandle, UnknownPriority};
