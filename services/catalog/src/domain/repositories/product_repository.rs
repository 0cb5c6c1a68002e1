//! 商品仓储接口

use async_trait::async_trait;
use storefront_ports::{Fetch, PageableRepository, StoreResult};

use crate::domain::entities::{Product, ProductChanges};
use crate::domain::value_objects::ProductId;

/// 商品仓储接口
///
/// `save` 会在一次写入中级联插入商品上尚未持久化的图片。
#[async_trait]
pub trait ProductRepository: PageableRepository<Product, ProductId> {
    /// 根据 slug 查找
    async fn find_by_slug(&self, slug: &str, fetch: Fetch) -> StoreResult<Option<Product>>;

    /// 读取已有商品（含图片）并在内存中合并字段，不写库
    async fn preload(
        &self,
        id: &ProductId,
        changes: ProductChanges,
    ) -> StoreResult<Option<Product>> {
        let product = self.find_by_id(id, Fetch::Eager).await?;

        Ok(product.map(|mut product| {
            product.apply_changes(changes);
            product
        }))
    }

    /// 删除全部商品（图片随之级联删除），返回删除的商品数
    async fn delete_all(&self) -> StoreResult<u64>;
}

/// 事务内的商品写仓储
#[async_trait]
pub trait ProductWriteRepository: Send + Sync {
    /// 保存商品并级联插入新图片，已存在的图片保持不变
    async fn save(&self, product: &Product) -> StoreResult<()>;
}
