//! 商品图片仓储接口

use async_trait::async_trait;
use storefront_ports::StoreResult;

use crate::domain::value_objects::ProductId;

/// 事务内的商品图片仓储
#[async_trait]
pub trait ProductImageRepository: Send + Sync {
    /// 删除商品的全部图片，返回删除的行数
    async fn delete_by_product(&self, product_id: &ProductId) -> StoreResult<u64>;
}
