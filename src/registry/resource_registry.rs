// ==========================================
// 应急资源调度系统 - 资源注册表
// ==========================================
// 职责: 持有全部资源, 按类型查询可用资源, 按ID分配/释放, 生成资源ID
// 红线: 不做唯一性校验, 按ID操作时只认插入顺序中的第一个匹配
// ==========================================

use crate::domain::resource::Resource;
use crate::domain::types::ResourceHandle;
use std::collections::HashMap;
use tracing::debug;

// ==========================================
// ResourceRegistry - 资源注册表
// ==========================================
#[derive(Debug, Default)]
pub struct ResourceRegistry {
    resources: Vec<Resource>,
    // 前缀 -> 已生成数量 (不同类型缩写相同则共享计数)
    type_counters: HashMap<String, u32>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // ==========================================
    // 注册与查询
    // ==========================================

    /// 登记资源（追加到末尾, 不校验ID重复）
    ///
    /// # 返回
    /// 该资源的句柄
    pub fn add(&mut self, resource: Resource) -> ResourceHandle {
        let handle = ResourceHandle(self.resources.len());
        debug!(
            resource_id = %resource.id,
            resource_type = %resource.resource_type,
            handle = %handle,
            "登记资源"
        );
        self.resources.push(resource);
        handle
    }

    /// 按句柄取资源
    pub fn get(&self, handle: ResourceHandle) -> Option<&Resource> {
        self.resources.get(handle.0)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// 按插入顺序遍历全部资源
    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter()
    }

    /// 按插入顺序遍历, 同时给出句柄
    pub fn iter_with_handles(&self) -> impl Iterator<Item = (ResourceHandle, &Resource)> {
        self.resources
            .iter()
            .enumerate()
            .map(|(index, resource)| (ResourceHandle(index), resource))
    }

    /// 指定类型的全部可用资源
    ///
    /// # 参数
    /// - `resource_type`: 资源类型（精确匹配）
    ///
    /// # 返回
    /// 按插入顺序排列的可用资源, 无匹配时为空
    pub fn available_by_type(&self, resource_type: &str) -> Vec<&Resource> {
        self.resources
            .iter()
            .filter(|r| r.available && r.resource_type == resource_type)
            .collect()
    }

    /// 指定类型的第一个可用资源句柄
    pub fn first_available_of_type(&self, resource_type: &str) -> Option<ResourceHandle> {
        self.resources
            .iter()
            .position(|r| r.available && r.resource_type == resource_type)
            .map(ResourceHandle)
    }

    // ==========================================
    // 分配与释放
    // ==========================================

    /// 按ID分配资源
    ///
    /// 按插入顺序找到第一个 ID 匹配且可用的资源, 置为不可用
    ///
    /// # 返回
    /// - `Some(resource)`: 被分配的资源
    /// - `None`: 不存在或已被占用
    pub fn allocate_by_id(&mut self, resource_id: &str) -> Option<&Resource> {
        let handle = self.allocate_handle_by_id(resource_id)?;
        self.get(handle)
    }

    /// 按ID分配资源, 返回被分配资源的句柄
    pub fn allocate_handle_by_id(&mut self, resource_id: &str) -> Option<ResourceHandle> {
        let index = self
            .resources
            .iter()
            .position(|r| r.id == resource_id && r.available)?;
        self.resources[index].available = false;
        Some(ResourceHandle(index))
    }

    /// 按句柄分配资源
    ///
    /// 分配引擎按类型选中资源后用此方法占用, 保证占用的就是选中的那一个
    /// （ID 唯一时与 allocate_by_id 等价）
    pub fn allocate(&mut self, handle: ResourceHandle) -> Option<&Resource> {
        let resource = self.resources.get_mut(handle.0)?;
        if !resource.available {
            return None;
        }
        resource.available = false;
        Some(&*resource)
    }

    /// 释放资源
    ///
    /// 所有 ID 匹配的资源都会被置为可用（可能存在重复ID）。
    /// 只翻转可用标记, 不会从事件的已分配列表中移除。
    ///
    /// # 返回
    /// 被释放的资源数量, 无匹配时为 0
    pub fn free(&mut self, resource_id: &str) -> usize {
        let mut freed = 0;
        for resource in self.resources.iter_mut().filter(|r| r.id == resource_id) {
            resource.available = true;
            freed += 1;
        }
        debug!(resource_id, freed, "释放资源");
        freed
    }

    // ==========================================
    // ID 生成
    // ==========================================

    /// 生成资源ID
    ///
    /// 规则: 类型名每个单词首字母大写拼接为前缀 + 3位序号
    /// 例如 "Fire Truck" -> FT001, FT002 ...
    ///
    /// 缩写相同的不同类型共享同一前缀和计数器
    /// （如 "Fire Truck" 与 "Field Team" 都是 FT）
    pub fn generate_id(&mut self, resource_type: &str) -> String {
        let prefix = type_prefix(resource_type);
        let counter = self.type_counters.entry(prefix.clone()).or_insert(0);
        *counter += 1;
        format!("{}{:03}", prefix, counter)
    }
}

/// 类型名缩写: 每个空白分隔单词的首字符, 转大写
fn type_prefix(resource_type: &str) -> String {
    resource_type
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .filter_map(|c| c.to_uppercase().next())
        .collect()
}
