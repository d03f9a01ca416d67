// ==========================================
// 应急资源调度系统 - 分配轮次报告
// ==========================================
// 职责: 定义分配轮次的报告 trait, 由调用方注入
// 说明: 引擎不持有全局日志状态, 所有输出经由 AllocationReporter
// ==========================================

use crate::engine::allocation::AllocationReport;
use crate::engine::error::ErrorReport;
use std::sync::Mutex;
use uuid::Uuid;

// ==========================================
// 报告 Trait
// ==========================================

/// 分配轮次报告者
///
/// 引擎在轮次开始、结束、失败时回调
pub trait AllocationReporter: Send + Sync {
    /// 轮次开始
    fn pass_started(&self, _pass_id: Uuid, _incident_count: usize) {}

    /// 轮次正常结束
    fn pass_finished(&self, _report: &AllocationReport) {}

    /// 轮次失败（本轮已中止）
    fn pass_failed(&self, report: &ErrorReport);
}

/// 空操作报告者
///
/// 用于不需要输出的场景（如单元测试）
#[derive(Debug, Clone, Default)]
pub struct NoOpReporter;

impl AllocationReporter for NoOpReporter {
    fn pass_failed(&self, _report: &ErrorReport) {}
}

/// 基于 tracing 的报告者（默认）
#[derive(Debug, Clone, Default)]
pub struct TracingReporter;

impl AllocationReporter for TracingReporter {
    fn pass_started(&self, pass_id: Uuid, incident_count: usize) {
        tracing::info!(%pass_id, incident_count, "按事件优先级开始分配资源");
    }

    fn pass_finished(&self, report: &AllocationReport) {
        tracing::info!(
            pass_id = %report.pass_id,
            visited = report.incidents_visited,
            allocated = report.allocations.len(),
            newly_assigned = report.newly_assigned.len(),
            unfulfilled = report.unfulfilled.len(),
            "分配轮次完成"
        );
    }

    fn pass_failed(&self, report: &ErrorReport) {
        tracing::error!(
            pass_id = %report.pass_id,
            kind = %report.kind,
            "分配轮次失败: {}",
            report.to_json()
        );
    }
}

/// 报告者收到的事件
#[derive(Debug, Clone)]
pub enum ReporterEvent {
    Started { pass_id: Uuid, incident_count: usize },
    Finished(AllocationReport),
    Failed(ErrorReport),
}

/// 记录型报告者
///
/// 保存所有回调事件, 供调用方事后检查
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<ReporterEvent>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: ReporterEvent) {
        // 锁中毒时仍保留已记录内容
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        events.push(event);
    }

    /// 全部事件快照
    pub fn events(&self) -> Vec<ReporterEvent> {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// 全部失败报告
    pub fn failures(&self) -> Vec<ErrorReport> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ReporterEvent::Failed(report) => Some(report),
                _ => None,
            })
            .collect()
    }

    /// 全部成功轮次报告
    pub fn finished(&self) -> Vec<AllocationReport> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ReporterEvent::Finished(report) => Some(report),
                _ => None,
            })
            .collect()
    }
}

impl AllocationReporter for RecordingReporter {
    fn pass_started(&self, pass_id: Uuid, incident_count: usize) {
        self.push(ReporterEvent::Started {
            pass_id,
            incident_count,
        });
    }

    fn pass_finished(&self, report: &AllocationReport) {
        self.push(ReporterEvent::Finished(report.clone()));
    }

    fn pass_failed(&self, report: &ErrorReport) {
        self.push(ReporterEvent::Failed(report.clone()));
    }
}
