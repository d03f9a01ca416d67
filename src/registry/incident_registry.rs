// ==========================================
// 应急资源调度系统 - 事件注册表
// ==========================================
// 职责: 持有全部事件, 查询未解决事件
// 说明: 允许重复ID, 唯一性由调用方在 add 之前自行保证
// ==========================================

use crate::domain::incident::Incident;
use tracing::debug;

// ==========================================
// IncidentRegistry - 事件注册表
// ==========================================
#[derive(Debug, Default)]
pub struct IncidentRegistry {
    incidents: Vec<Incident>,
}

impl IncidentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记事件（无条件追加）
    pub fn add(&mut self, incident: Incident) {
        debug!(
            incident_id = %incident.id,
            priority = %incident.priority,
            required = incident.required_resources.len(),
            "登记事件"
        );
        self.incidents.push(incident);
    }

    /// 未解决事件（状态不是 Assigned）, 保持注册表顺序
    pub fn unresolved(&self) -> Vec<&Incident> {
        self.incidents.iter().filter(|i| !i.is_assigned()).collect()
    }

    /// 是否已存在该ID的事件
    pub fn contains_id(&self, incident_id: &str) -> bool {
        self.incidents.iter().any(|i| i.id == incident_id)
    }

    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    /// 按当前顺序遍历（分配后为优先级顺序）
    pub fn iter(&self) -> impl Iterator<Item = &Incident> {
        self.incidents.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Incident> {
        self.incidents.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Incident> {
        self.incidents.get_mut(index)
    }

    /// 引擎在分配轮次中原地排序和修改事件
    pub(crate) fn incidents_mut(&mut self) -> &mut Vec<Incident> {
        &mut self.incidents
    }
}
