//! Unit of Work 模式
//!
//! 提供跨商品与商品图片的事务协调能力，确保操作的原子性。

use async_trait::async_trait;
use storefront_ports::{StoreResult, UnitOfWork};

use crate::domain::repositories::{ProductImageRepository, ProductWriteRepository};

/// 商品目录的 Unit of Work
///
/// # 使用示例
///
/// ```ignore
/// let uow = uow_factory.begin().await?;
///
/// // 所有操作在同一事务中
/// uow.product_images().delete_by_product(&product.id).await?;
/// uow.products().save(&product).await?;
///
/// // 提交事务
/// uow.commit().await?;
/// ```
pub trait CatalogUnitOfWork: UnitOfWork {
    /// 获取商品写仓储
    fn products(&self) -> &dyn ProductWriteRepository;

    /// 获取商品图片仓储
    fn product_images(&self) -> &dyn ProductImageRepository;
}

/// Unit of Work 工厂 trait
#[async_trait]
pub trait UnitOfWorkFactory: Send + Sync {
    /// 获取专用连接并开始新的事务
    async fn begin(&self) -> StoreResult<Box<dyn CatalogUnitOfWork>>;
}
