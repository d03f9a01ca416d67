// ==========================================
// 应急资源调度系统 - 核心库
// ==========================================
// 系统定位: 按事件优先级把救援资源分配给应急事件
// 核心: 资源注册表 + 事件注册表 + 分配引擎 (不做 I/O)
// 外围: 配置、日志、交互式控制台
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 注册表层 - 内存中的实体集合
pub mod registry;

// 引擎层 - 优先级排序与分配
pub mod engine;

// 配置层 - 配置文件与种子数据
pub mod config;

// 日志系统
pub mod logging;

// 控制台层 - 交互式菜单
pub mod console;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体与类型
pub use domain::{Incident, IncidentStatus, Priority, Resource, ResourceHandle, ResourceRef};

// 注册表
pub use registry::{IncidentRegistry, ResourceRegistry};

// 引擎
pub use engine::{
    AllocationEngine, AllocationError, AllocationFailure, AllocationReport, AllocationReporter,
    AllocationResult, ErrorReport,
};

// 配置
pub use config::{AppConfig, ConfigError, ConfigManager};

// 控制台
pub use console::UserConsole;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Emergency Resource Allocation System";
