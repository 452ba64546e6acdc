use dashmap::DashMap;

use super::event::Resource;

/// 资源版本管理器
///
/// 每种资源类型维护独立的版本号，支持原子递增。
/// Subscribers compare versions to tell whether a snapshot they hold is stale.
#[derive(Debug, Default)]
pub struct ResourceVersions {
    versions: DashMap<Resource, u64>,
}

impl ResourceVersions {
    pub fn new() -> Self {
        Self::default()
    }

    /// 递增指定资源的版本号并返回新值
    ///
    /// 如果资源不存在，从 0 开始递增（返回 1）
    pub fn increment(&self, resource: Resource) -> u64 {
        let mut entry = self.versions.entry(resource).or_insert(0);
        *entry += 1;
        *entry
    }

    /// 获取指定资源的当前版本号，不存在时返回 0
    pub fn get(&self, resource: Resource) -> u64 {
        self.versions.get(&resource).map(|v| *v).unwrap_or(0)
    }
}
