// ==========================================
// 应急资源调度系统 - 事件优先级排序引擎
// ==========================================
// 职责: 按优先级 High -> Medium -> Low 稳定排序事件
// 输入: 注册表中的事件列表
// 输出: 原地排序后的事件列表
// 红线: 未知优先级直接报错, 不做默认等级兜底
// ==========================================

use crate::domain::incident::Incident;
use crate::engine::error::AllocationError;

// ==========================================
// PrioritySorter - 优先级排序引擎
// ==========================================
pub struct PrioritySorter {
    // 无状态引擎,不需要注入依赖
}

impl PrioritySorter {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 计算每个事件的排序秩
    ///
    /// # 返回
    /// - `Ok(ranks)`: 与输入一一对应的秩
    /// - `Err(InvalidPriority)`: 第一个优先级无法识别的事件
    pub fn ranks(&self, incidents: &[Incident]) -> Result<Vec<u8>, AllocationError> {
        incidents
            .iter()
            .map(|incident| {
                incident
                    .parsed_priority()
                    .map(|p| p.rank())
                    .map_err(|_| AllocationError::InvalidPriority {
                        incident_id: incident.id.clone(),
                        priority: incident.priority.clone(),
                    })
            })
            .collect()
    }

    /// 原地稳定排序
    ///
    /// 先计算全部秩再排序: 任一事件优先级无效时, 列表保持原样
    /// 同优先级事件保持插入顺序
    pub fn sort(&self, incidents: &mut Vec<Incident>) -> Result<(), AllocationError> {
        let ranks = self.ranks(incidents)?;

        let mut keyed: Vec<(u8, Incident)> = ranks.into_iter().zip(incidents.drain(..)).collect();
        // sort_by_key 是稳定排序
        keyed.sort_by_key(|(rank, _)| *rank);
        incidents.extend(keyed.into_iter().map(|(_, incident)| incident));
        Ok(())
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for PrioritySorter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn incident(id: &str, priority: &str) -> Incident {
        Incident::new(id, "Zone 1", "Fire", priority, vec![])
    }

    fn ids(incidents: &[Incident]) -> Vec<&str> {
        incidents.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_sort_by_priority() {
        let sorter = PrioritySorter::new();
        let mut incidents = vec![
            incident("L1", "Low"),
            incident("H1", "High"),
            incident("M1", "Medium"),
        ];

        sorter.sort(&mut incidents).unwrap();
        assert_eq!(ids(&incidents), vec!["H1", "M1", "L1"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_priority() {
        let sorter = PrioritySorter::new();
        let mut incidents = vec![
            incident("M1", "Medium"),
            incident("H1", "High"),
            incident("M2", "Medium"),
            incident("H2", "High"),
            incident("M3", "Medium"),
        ];

        sorter.sort(&mut incidents).unwrap();
        assert_eq!(ids(&incidents), vec!["H1", "H2", "M1", "M2", "M3"]);

        // 再排一次顺序不变
        sorter.sort(&mut incidents).unwrap();
        assert_eq!(ids(&incidents), vec!["H1", "H2", "M1", "M2", "M3"]);
    }

    #[test]
    fn test_invalid_priority_leaves_order_untouched() {
        let sorter = PrioritySorter::new();
        let mut incidents = vec![
            incident("L1", "Low"),
            incident("X1", "urgent"),
            incident("H1", "High"),
        ];

        let err = sorter.sort(&mut incidents).unwrap_err();
        assert_eq!(
            err,
            AllocationError::InvalidPriority {
                incident_id: "X1".to_string(),
                priority: "urgent".to_string(),
            }
        );
        assert_eq!(ids(&incidents), vec!["L1", "X1", "H1"]);
    }

    #[test]
    fn test_sort_empty() {
        let sorter = PrioritySorter::default();
        let mut incidents: Vec<Incident> = vec![];
        assert!(sorter.sort(&mut incidents).is_ok());
        assert_eq!(sorter.ranks(&incidents).unwrap(), Vec::<u8>::new());
    }
}
