// ==========================================
// 应急资源调度系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: "无可用资源" 不是错误, 通过 Option / 空列表表达
// ==========================================

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::backtrace::Backtrace;
use std::collections::BTreeMap;
use thiserror::Error;
use uuid::Uuid;

/// 分配引擎错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// 事件优先级不是 High/Medium/Low 之一, 本轮分配中止
    #[error("事件优先级无效: incident_id={incident_id}, priority='{priority}' (可选: High/Medium/Low)")]
    InvalidPriority { incident_id: String, priority: String },
}

impl AllocationError {
    /// 错误类别标识
    pub fn kind(&self) -> &'static str {
        match self {
            AllocationError::InvalidPriority { .. } => "InvalidPriority",
        }
    }

    /// 结构化上下文字段
    pub fn context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        match self {
            AllocationError::InvalidPriority {
                incident_id,
                priority,
            } => {
                context.insert("incident_id".to_string(), incident_id.clone());
                context.insert("priority".to_string(), priority.clone());
            }
        }
        context
    }
}

// ==========================================
// ErrorReport - 结构化错误报告
// ==========================================
// 交给注入的 AllocationReporter, 由其决定如何记录
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub pass_id: Uuid,
    pub kind: String,
    pub message: String,
    pub context: BTreeMap<String, String>,
    pub stack_trace: String,
    pub occurred_at: DateTime<Utc>,
}

impl ErrorReport {
    /// 从引擎错误生成报告, 并捕获当前调用栈
    pub fn capture(pass_id: Uuid, error: &AllocationError) -> Self {
        Self {
            pass_id,
            kind: error.kind().to_string(),
            message: error.to_string(),
            context: error.context(),
            stack_trace: Backtrace::force_capture().to_string(),
            occurred_at: Utc::now(),
        }
    }

    /// 序列化为 JSON（用于日志输出）
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!(
                r#"{{"kind":"{}","message":"报告序列化失败: {}"}}"#,
                self.kind, e
            )
        })
    }
}

// ==========================================
// AllocationFailure - 分配轮次失败结果
// ==========================================
#[derive(Error, Debug, Clone)]
#[error("分配轮次失败 (pass_id={pass_id}): {error}")]
pub struct AllocationFailure {
    pub pass_id: Uuid,
    #[source]
    pub error: AllocationError,
    pub report: ErrorReport,
}
