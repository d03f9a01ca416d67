// ==========================================
// 应急资源调度系统 - 种子数据
// ==========================================
// 职责: 启动时预置的资源与事件
// 说明: 资源ID缺省时由 ResourceRegistry::generate_id 生成
// ==========================================

use crate::domain::incident::Incident;
use crate::domain::resource::Resource;
use crate::registry::{IncidentRegistry, ResourceRegistry};
use serde::{Deserialize, Serialize};
use tracing::info;

/// 种子资源
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSeed {
    #[serde(default)]
    pub id: Option<String>,
    pub resource_type: String,
    pub location: String,
}

impl ResourceSeed {
    fn new(id: &str, resource_type: &str, location: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            resource_type: resource_type.to_string(),
            location: location.to_string(),
        }
    }
}

/// 种子事件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentSeed {
    pub id: String,
    pub location: String,
    pub emergency_type: String,
    pub priority: String,
    #[serde(default)]
    pub required_resources: Vec<String>,
}

impl IncidentSeed {
    fn new(
        id: &str,
        location: &str,
        emergency_type: &str,
        priority: &str,
        required: &[&str],
    ) -> Self {
        Self {
            id: id.to_string(),
            location: location.to_string(),
            emergency_type: emergency_type.to_string(),
            priority: priority.to_string(),
            required_resources: required.iter().map(|r| r.to_string()).collect(),
        }
    }

    pub fn to_incident(&self) -> Incident {
        Incident::new(
            self.id.clone(),
            self.location.clone(),
            self.emergency_type.clone(),
            self.priority.clone(),
            self.required_resources.clone(),
        )
    }
}

// ==========================================
// SeedData - 种子数据集合
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub resources: Vec<ResourceSeed>,
    pub incidents: Vec<IncidentSeed>,
}

impl Default for SeedData {
    fn default() -> Self {
        Self {
            resources: vec![
                ResourceSeed::new("AMB001", "Ambulance", "Zone 1"),
                ResourceSeed::new("FIRE001", "Fire Truck", "Zone 2"),
                ResourceSeed::new("MED001", "Medical Team", "Zone 1"),
            ],
            incidents: vec![
                IncidentSeed::new("INC001", "Zone 1", "Fire", "High", &["Fire Truck"]),
                IncidentSeed::new(
                    "INC002",
                    "Zone 1",
                    "Medical Emergency",
                    "Medium",
                    &["Ambulance", "Medical Team"],
                ),
                IncidentSeed::new("INC003", "Zone 2", "Traffic Accident", "Low", &["Ambulance"]),
            ],
        }
    }
}

impl SeedData {
    /// 空种子（不预置任何数据）
    pub fn empty() -> Self {
        Self {
            resources: Vec::new(),
            incidents: Vec::new(),
        }
    }

    /// 载入到注册表
    pub fn apply(&self, incidents: &mut IncidentRegistry, resources: &mut ResourceRegistry) {
        for seed in &self.resources {
            let id = match &seed.id {
                Some(id) => id.clone(),
                None => resources.generate_id(&seed.resource_type),
            };
            resources.add(Resource::new(id, seed.resource_type.clone(), seed.location.clone()));
        }

        for seed in &self.incidents {
            incidents.add(seed.to_incident());
        }

        info!(
            resources = self.resources.len(),
            incidents = self.incidents.len(),
            "已载入种子数据"
        );
    }
}
