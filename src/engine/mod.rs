// ==========================================
// 应急资源调度系统 - 引擎层
// ==========================================
// 职责: 优先级排序与资源分配规则
// 红线: 引擎不做 I/O, 输出统一交给注入的 AllocationReporter
// ==========================================

pub mod allocation;
pub mod error;
pub mod events;
pub mod priority;

// 重导出核心引擎
pub use allocation::{
    AllocationEngine, AllocationRecord, AllocationReport, AllocationResult, UnfulfilledDemand,
};
pub use error::{AllocationError, AllocationFailure, ErrorReport};
pub use events::{
    AllocationReporter, NoOpReporter, RecordingReporter, ReporterEvent, TracingReporter,
};
pub use priority::PrioritySorter;
