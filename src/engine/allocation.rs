// ==========================================
// 应急资源调度系统 - 资源分配引擎
// ==========================================
// 职责: 按事件优先级对资源做一次贪心匹配
// 输入: 事件注册表 + 资源注册表
// 输出: 原地更新资源可用性、事件已分配资源与状态 + 本轮报告
// 红线: 高优先级先分配; 允许部分分配; 已分配资源不回收
// ==========================================

use crate::domain::incident::Incident;
use crate::domain::resource::ResourceRef;
use crate::domain::types::IncidentStatus;
use crate::engine::error::{AllocationFailure, ErrorReport};
use crate::engine::events::{AllocationReporter, TracingReporter};
use crate::engine::priority::PrioritySorter;
use crate::registry::{IncidentRegistry, ResourceRegistry};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};
use uuid::Uuid;

/// 单次分配记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationRecord {
    pub incident_id: String,
    pub resource_id: String,
    pub resource_type: String,
}

/// 本轮未满足的需求
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnfulfilledDemand {
    pub incident_id: String,
    pub resource_type: String,
}

/// 分配轮次报告（仅供参考, 真实状态以注册表为准）
#[derive(Debug, Clone, Serialize)]
pub struct AllocationReport {
    pub pass_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub incidents_visited: usize,           // 本轮处理的未完成事件数
    pub allocations: Vec<AllocationRecord>, // 本轮新分配
    pub newly_assigned: Vec<String>,        // 本轮转为 Assigned 的事件ID
    pub unfulfilled: Vec<UnfulfilledDemand>,
}

impl AllocationReport {
    fn new(pass_id: Uuid, started_at: DateTime<Utc>) -> Self {
        Self {
            pass_id,
            started_at,
            finished_at: started_at,
            incidents_visited: 0,
            allocations: Vec::new(),
            newly_assigned: Vec::new(),
            unfulfilled: Vec::new(),
        }
    }

    pub fn resources_allocated(&self) -> usize {
        self.allocations.len()
    }
}

/// 分配轮次结果
pub type AllocationResult = Result<AllocationReport, AllocationFailure>;

// ==========================================
// AllocationEngine - 资源分配引擎
// ==========================================
pub struct AllocationEngine {
    sorter: PrioritySorter,
    reporter: Arc<dyn AllocationReporter>,
}

impl AllocationEngine {
    /// 构造函数（使用 tracing 报告者）
    pub fn new() -> Self {
        Self::with_reporter(Arc::new(TracingReporter))
    }

    /// 注入报告者
    pub fn with_reporter(reporter: Arc<dyn AllocationReporter>) -> Self {
        Self {
            sorter: PrioritySorter::new(),
            reporter,
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 重新排序并分配资源（单轮）
    ///
    /// 规则:
    /// 1) 事件按 High/Medium/Low 稳定排序（原地）
    /// 2) 跳过已是 Assigned 的事件
    /// 3) 逐个处理未满足的需求: 取该类型第一个可用资源并占用; 无可用资源则本轮跳过该需求
    /// 4) 需求全部满足后置为 Assigned, 否则保持 Pending 并保留已分配资源
    ///
    /// # 返回
    /// - `Ok(report)`: 本轮报告
    /// - `Err(failure)`: 存在无效优先级, 本轮在任何修改之前中止; 失败已交给报告者
    ///
    /// 不会 panic; 每次调用只执行一轮, 是否再次分配由调用方决定
    #[instrument(skip_all, fields(
        incidents = incidents.len(),
        resources = resources.len()
    ))]
    pub fn reprioritize_and_allocate(
        &self,
        incidents: &mut IncidentRegistry,
        resources: &mut ResourceRegistry,
    ) -> AllocationResult {
        let pass_id = Uuid::new_v4();
        let started_at = Utc::now();
        self.reporter.pass_started(pass_id, incidents.len());

        // 1. 优先级排序（失败时不做任何修改）
        if let Err(error) = self.sorter.sort(incidents.incidents_mut()) {
            let report = ErrorReport::capture(pass_id, &error);
            self.reporter.pass_failed(&report);
            return Err(AllocationFailure {
                pass_id,
                error,
                report,
            });
        }

        // 2. 按排序结果逐个分配
        let mut report = AllocationReport::new(pass_id, started_at);
        for incident in incidents.incidents_mut().iter_mut() {
            if incident.is_assigned() {
                continue;
            }
            report.incidents_visited += 1;
            self.allocate_incident(incident, resources, &mut report);
        }

        report.finished_at = Utc::now();
        self.reporter.pass_finished(&report);
        Ok(report)
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    /// 为单个事件补齐需求
    fn allocate_incident(
        &self,
        incident: &mut Incident,
        resources: &mut ResourceRegistry,
        report: &mut AllocationReport,
    ) {
        let demands: Vec<String> = incident
            .outstanding_demands()
            .into_iter()
            .map(str::to_string)
            .collect();

        for resource_type in demands {
            let allocated = resources
                .first_available_of_type(&resource_type)
                .and_then(|handle| {
                    resources
                        .allocate(handle)
                        .map(|resource| ResourceRef::new(handle, resource))
                });

            match allocated {
                Some(resource_ref) => {
                    debug!(
                        incident_id = %incident.id,
                        resource_id = %resource_ref.resource_id,
                        resource_type = %resource_type,
                        "分配资源"
                    );
                    report.allocations.push(AllocationRecord {
                        incident_id: incident.id.clone(),
                        resource_id: resource_ref.resource_id.clone(),
                        resource_type: resource_ref.resource_type.clone(),
                    });
                    incident.allocated_resources.push(resource_ref);
                }
                None => {
                    debug!(
                        incident_id = %incident.id,
                        resource_type = %resource_type,
                        "无可用资源, 本轮跳过该需求"
                    );
                    report.unfulfilled.push(UnfulfilledDemand {
                        incident_id: incident.id.clone(),
                        resource_type,
                    });
                }
            }
        }

        if incident.is_fully_allocated() {
            incident.status = IncidentStatus::Assigned;
            report.newly_assigned.push(incident.id.clone());
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for AllocationEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 测试模块
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resource::Resource;
    use crate::engine::events::{NoOpReporter, RecordingReporter};

    // ==========================================
    // 测试辅助函数
    // ==========================================

    fn engine() -> AllocationEngine {
        AllocationEngine::with_reporter(Arc::new(NoOpReporter))
    }

    fn required(types: &[&str]) -> Vec<String> {
        types.iter().map(|t| t.to_string()).collect()
    }

    fn incident(id: &str, priority: &str, types: &[&str]) -> Incident {
        Incident::new(id, "Zone 1", "Fire", priority, required(types))
    }

    fn allocated_ids(incident: &Incident) -> Vec<&str> {
        incident
            .allocated_resources
            .iter()
            .map(|r| r.resource_id.as_str())
            .collect()
    }

    fn find<'a>(incidents: &'a IncidentRegistry, id: &str) -> &'a Incident {
        incidents.iter().find(|i| i.id == id).unwrap()
    }

    #[test]
    fn test_single_incident_gets_resource() {
        let mut incidents = IncidentRegistry::new();
        let mut resources = ResourceRegistry::new();
        incidents.add(incident("INC001", "High", &["Ambulance"]));
        resources.add(Resource::new("AMB001", "Ambulance", "Zone 1"));

        let report = engine()
            .reprioritize_and_allocate(&mut incidents, &mut resources)
            .unwrap();

        let incident = find(&incidents, "INC001");
        assert_eq!(incident.status, IncidentStatus::Assigned);
        assert_eq!(allocated_ids(incident), vec!["AMB001"]);
        assert!(!resources.iter().next().unwrap().available);
        assert_eq!(report.resources_allocated(), 1);
        assert_eq!(report.newly_assigned, vec!["INC001".to_string()]);
    }

    #[test]
    fn test_high_priority_served_first() {
        let mut incidents = IncidentRegistry::new();
        let mut resources = ResourceRegistry::new();
        incidents.add(incident("LOW", "Low", &["Ambulance"]));
        incidents.add(incident("HIGH", "High", &["Ambulance"]));
        resources.add(Resource::new("AMB001", "Ambulance", "Zone 1"));

        engine()
            .reprioritize_and_allocate(&mut incidents, &mut resources)
            .unwrap();

        assert_eq!(find(&incidents, "HIGH").status, IncidentStatus::Assigned);
        assert_eq!(find(&incidents, "LOW").status, IncidentStatus::Pending);
        assert!(find(&incidents, "LOW").allocated_resources.is_empty());

        // 注册表已按优先级重排
        let order: Vec<_> = incidents.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(order, vec!["HIGH", "LOW"]);
    }

    #[test]
    fn test_partial_allocation_accumulates_across_passes() {
        let mut incidents = IncidentRegistry::new();
        let mut resources = ResourceRegistry::new();
        incidents.add(Incident::new(
            "INC002",
            "Zone 1",
            "Medical Emergency",
            "Medium",
            required(&["Ambulance", "Medical Team"]),
        ));
        resources.add(Resource::new("AMB001", "Ambulance", "Zone 1"));
        resources.add(Resource::new("AMB002", "Ambulance", "Zone 1"));

        let engine = engine();
        let report = engine
            .reprioritize_and_allocate(&mut incidents, &mut resources)
            .unwrap();
        let incident = find(&incidents, "INC002");
        assert_eq!(incident.status, IncidentStatus::Pending);
        assert_eq!(allocated_ids(incident), vec!["AMB001"]);
        assert_eq!(
            report.unfulfilled,
            vec![UnfulfilledDemand {
                incident_id: "INC002".to_string(),
                resource_type: "Medical Team".to_string(),
            }]
        );

        // 第二轮: 只补齐缺的医疗队, 不会再拿第二辆救护车
        let report = engine
            .reprioritize_and_allocate(&mut incidents, &mut resources)
            .unwrap();
        assert_eq!(report.resources_allocated(), 0);
        assert_eq!(allocated_ids(find(&incidents, "INC002")), vec!["AMB001"]);
        assert_eq!(resources.available_by_type("Ambulance").len(), 1);

        resources.add(Resource::new("MED001", "Medical Team", "Zone 1"));
        engine
            .reprioritize_and_allocate(&mut incidents, &mut resources)
            .unwrap();
        let incident = find(&incidents, "INC002");
        assert_eq!(incident.status, IncidentStatus::Assigned);
        assert_eq!(allocated_ids(incident), vec!["AMB001", "MED001"]);
    }

    #[test]
    fn test_repeated_type_demands() {
        let mut incidents = IncidentRegistry::new();
        let mut resources = ResourceRegistry::new();
        incidents.add(Incident::new(
            "INC010",
            "Zone 3",
            "Building Collapse",
            "High",
            required(&["Ambulance", "Ambulance"]),
        ));
        resources.add(Resource::new("AMB001", "Ambulance", "Zone 1"));
        resources.add(Resource::new("AMB002", "Ambulance", "Zone 2"));

        engine()
            .reprioritize_and_allocate(&mut incidents, &mut resources)
            .unwrap();

        let incident = find(&incidents, "INC010");
        assert_eq!(incident.status, IncidentStatus::Assigned);
        assert_eq!(allocated_ids(incident), vec!["AMB001", "AMB002"]);
    }

    #[test]
    fn test_empty_requirements_assigned_immediately() {
        let mut incidents = IncidentRegistry::new();
        let mut resources = ResourceRegistry::new();
        incidents.add(Incident::new("INC888", "Zone 4", "Minor", "Low", vec![]));

        engine()
            .reprioritize_and_allocate(&mut incidents, &mut resources)
            .unwrap();

        let incident = find(&incidents, "INC888");
        assert_eq!(incident.status, IncidentStatus::Assigned);
        assert!(incident.allocated_resources.is_empty());
    }

    #[test]
    fn test_assigned_incidents_are_skipped() {
        let mut incidents = IncidentRegistry::new();
        let mut resources = ResourceRegistry::new();
        incidents.add(incident("INC001", "High", &["Fire Truck"]));
        resources.add(Resource::new("FT001", "Fire Truck", "Zone 2"));

        let engine = engine();
        engine
            .reprioritize_and_allocate(&mut incidents, &mut resources)
            .unwrap();

        // 外部释放后状态不回退, 也不会再次分配
        resources.free("FT001");
        let report = engine
            .reprioritize_and_allocate(&mut incidents, &mut resources)
            .unwrap();
        assert_eq!(report.incidents_visited, 0);
        assert_eq!(find(&incidents, "INC001").status, IncidentStatus::Assigned);
        assert_eq!(find(&incidents, "INC001").allocated_resources.len(), 1);
        assert!(resources.iter().next().unwrap().available);
    }

    #[test]
    fn test_invalid_priority_fails_without_mutation() {
        let reporter = Arc::new(RecordingReporter::new());
        let engine = AllocationEngine::with_reporter(reporter.clone());

        let mut incidents = IncidentRegistry::new();
        let mut resources = ResourceRegistry::new();
        incidents.add(incident("INC001", "Low", &["Ambulance"]));
        incidents.add(incident("INC002", "Critical", &["Ambulance"]));
        resources.add(Resource::new("AMB001", "Ambulance", "Zone 1"));

        let failure = engine
            .reprioritize_and_allocate(&mut incidents, &mut resources)
            .unwrap_err();

        assert_eq!(failure.error.kind(), "InvalidPriority");
        assert_eq!(failure.report.context["incident_id"], "INC002");
        assert!(resources.iter().all(|r| r.available));
        assert!(incidents.iter().all(|i| i.allocated_resources.is_empty()));

        let failures = reporter.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].pass_id, failure.pass_id);
        assert!(reporter.finished().is_empty());
    }
}
