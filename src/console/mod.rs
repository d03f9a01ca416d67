// ==========================================
// 应急资源调度系统 - 交互式控制台
// ==========================================
// 职责: 菜单、输入解析、结果展示, 调用注册表与分配引擎
// 说明: 读写对象可注入, 测试时用内存缓冲区驱动
// ==========================================

pub mod text;

use crate::config::AppConfig;
use crate::domain::incident::Incident;
use crate::domain::resource::Resource;
use crate::engine::AllocationEngine;
use crate::registry::{IncidentRegistry, ResourceRegistry};
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::io::{BufRead, Write};
use text::{parse_required_resources, title_case};
use tracing::{error, info};

/// 菜单项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    AddIncident,
    AddResource,
    ViewIncidents,
    ViewResources,
    Allocate,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::AddIncident),
            "2" => Some(MenuChoice::AddResource),
            "3" => Some(MenuChoice::ViewIncidents),
            "4" => Some(MenuChoice::ViewResources),
            "5" => Some(MenuChoice::Allocate),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

// ==========================================
// UserConsole - 交互式控制台
// ==========================================
pub struct UserConsole<R, W> {
    incidents: IncidentRegistry,
    resources: ResourceRegistry,
    engine: AllocationEngine,
    known_types: BTreeSet<String>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> UserConsole<R, W> {
    /// 构造控制台并载入种子数据
    pub fn new(config: &AppConfig, engine: AllocationEngine, input: R, output: W) -> Self {
        let mut incidents = IncidentRegistry::new();
        let mut resources = ResourceRegistry::new();
        config.seed.apply(&mut incidents, &mut resources);

        let known_types = config
            .known_resource_types
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            incidents,
            resources,
            engine,
            known_types,
            input,
            output,
        }
    }

    pub fn incidents(&self) -> &IncidentRegistry {
        &self.incidents
    }

    pub fn resources(&self) -> &ResourceRegistry {
        &self.resources
    }

    pub fn known_types(&self) -> &BTreeSet<String> {
        &self.known_types
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    // ==========================================
    // 主循环
    // ==========================================

    /// 运行菜单直到选择退出或输入结束
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "\n--- Emergency Resource Allocation System ---")?;
            writeln!(self.output, "1. Add Incident")?;
            writeln!(self.output, "2. Add Resource")?;
            writeln!(self.output, "3. View Incidents")?;
            writeln!(self.output, "4. View Resources")?;
            writeln!(self.output, "5. Allocate Resources")?;
            writeln!(self.output, "6. Exit")?;

            let Some(choice) = self.prompt("Choose an option: ")? else {
                info!("输入结束, 退出控制台");
                return Ok(());
            };

            match MenuChoice::parse(&choice) {
                Some(MenuChoice::AddIncident) => self.add_incident()?,
                Some(MenuChoice::AddResource) => self.add_resource()?,
                Some(MenuChoice::ViewIncidents) => self.view_incidents()?,
                Some(MenuChoice::ViewResources) => self.view_resources()?,
                Some(MenuChoice::Allocate) => self.allocate()?,
                Some(MenuChoice::Exit) => return Ok(()),
                None => writeln!(self.output, "Invalid choice. Try again.")?,
            }
        }
    }

    // ==========================================
    // 菜单操作
    // ==========================================

    /// 新增事件（ID 重复时拒绝）
    pub fn add_incident(&mut self) -> Result<()> {
        let Some(id) = self.prompt("Incident ID: ")? else {
            return Ok(());
        };
        let id = id.trim().to_string();

        if self.incidents.contains_id(&id) {
            writeln!(
                self.output,
                "Incident with ID '{}' already exists. Please enter a unique ID.",
                id
            )?;
            return Ok(());
        }

        let Some(location) = self.prompt("Location: ")? else {
            return Ok(());
        };
        let Some(emergency_type) = self.prompt("Emergency Type: ")? else {
            return Ok(());
        };
        let Some(priority) = self.prompt("Priority (High/Medium/Low): ")? else {
            return Ok(());
        };
        let Some(required) = self.prompt("Required Resources (comma-separated): ")? else {
            return Ok(());
        };

        let incident = Incident::new(
            id,
            location.trim(),
            emergency_type.trim(),
            priority.trim(),
            parse_required_resources(&required),
        );
        self.incidents.add(incident);
        writeln!(self.output, "Incident added.")?;
        Ok(())
    }

    /// 新增资源（未知类型需确认, ID 自动生成）
    pub fn add_resource(&mut self) -> Result<()> {
        let listing = self
            .known_types
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(self.output, "Resource types can be: {}", listing)?;

        let Some(raw_type) = self.prompt("Resource Type: ")? else {
            return Ok(());
        };
        let resource_type = title_case(raw_type.trim());
        if resource_type.is_empty() {
            writeln!(self.output, "Resource type cannot be empty.")?;
            return Ok(());
        }

        let known = self
            .known_types
            .iter()
            .any(|t| title_case(t) == resource_type);
        if !known {
            let question = format!(
                "'{}' is a new resource type. Add it anyway? (yes/no): ",
                resource_type
            );
            let confirm = self.prompt(&question)?.unwrap_or_default();
            if confirm.trim().to_lowercase() != "yes" {
                writeln!(self.output, "Resource addition cancelled.")?;
                return Ok(());
            }
            info!(resource_type = %resource_type, "新增资源类型");
            self.known_types.insert(resource_type.clone());
        }

        let id = self.resources.generate_id(&resource_type);
        writeln!(self.output, "Generated Resource ID: {}", id)?;
        let Some(location) = self.prompt("Location: ")? else {
            return Ok(());
        };

        self.resources.add(Resource::new(id, resource_type, location.trim()));
        writeln!(self.output, "Resource added.")?;
        Ok(())
    }

    /// 展示全部事件（当前注册表顺序）
    pub fn view_incidents(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Incidents ---")?;
        for incident in self.incidents.iter() {
            writeln!(
                self.output,
                "ID: {}, Type: {}, Priority: {}, Status: {}, Resources: {}",
                incident.id,
                incident.emergency_type,
                incident.priority,
                incident.status,
                incident.allocated_summary()
            )?;
        }
        Ok(())
    }

    /// 展示全部资源
    pub fn view_resources(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Resources ---")?;
        for resource in self.resources.iter() {
            writeln!(
                self.output,
                "ID: {}, Type: {}, Location: {}, Status: {}",
                resource.id,
                resource.resource_type,
                resource.location,
                resource.status_label()
            )?;
        }
        Ok(())
    }

    /// 执行一轮分配
    pub fn allocate(&mut self) -> Result<()> {
        info!("按事件优先级开始分配...");
        match self
            .engine
            .reprioritize_and_allocate(&mut self.incidents, &mut self.resources)
        {
            Ok(_) => writeln!(self.output, "Resources allocated.")?,
            Err(failure) => {
                // 失败详情已由 reporter 记录
                error!(pass_id = %failure.pass_id, "分配失败: {}", failure.error);
                writeln!(self.output, "Allocation failed: {}", failure.error)?;
            }
        }
        Ok(())
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    /// 输出提示并读取一行
    ///
    /// # 返回
    /// - `Some(line)`: 去掉行尾换行的输入
    /// - `None`: 输入已结束
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush().context("刷新控制台输出失败")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("读取控制台输入失败")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}
