//! Repository trait 定义

use async_trait::async_trait;
use storefront_common::Pagination;

use crate::StoreResult;

/// 关联数据加载策略
///
/// 读取时显式声明是否同时加载聚合内的关联行。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Fetch {
    /// 只加载主表
    #[default]
    Lazy,
    /// 在同一次读取中加载关联行
    Eager,
}

impl Fetch {
    pub fn is_eager(&self) -> bool {
        matches!(self, Fetch::Eager)
    }
}

/// 基础 Repository trait
#[async_trait]
pub trait Repository<T, ID>: Send + Sync {
    /// 根据 ID 查找
    async fn find_by_id(&self, id: &ID, fetch: Fetch) -> StoreResult<Option<T>>;

    /// 保存实体（新建或覆盖），级联写入聚合内的新关联行
    async fn save(&self, entity: &T) -> StoreResult<()>;

    /// 删除实体，返回是否有行被删除
    async fn delete(&self, id: &ID) -> StoreResult<bool>;

    /// 检查是否存在
    async fn exists(&self, id: &ID) -> StoreResult<bool>;
}

/// 支持分页查询的 Repository
#[async_trait]
pub trait PageableRepository<T, ID>: Repository<T, ID> {
    /// 分页查询所有
    async fn find_all(&self, pagination: &Pagination, fetch: Fetch) -> StoreResult<Vec<T>>;

    /// 统计总数
    async fn count(&self) -> StoreResult<u64>;
}
