//! 事务感知的 Repository 实现
//!
//! 这些 Repository 使用共享的 Transaction 而非 PgPool。

use async_trait::async_trait;
use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use storefront_adapter_postgres::transaction_consumed;
use storefront_ports::StoreResult;
use tokio::sync::Mutex;

use super::statements::{delete_images, insert_images, upsert_product};
use crate::domain::{Product, ProductId, ProductImageRepository, ProductWriteRepository};

/// 共享事务类型
pub(crate) type SharedTx = Arc<Mutex<Option<Transaction<'static, Postgres>>>>;

/// 宏：定义一个简单的 TxRepository 结构体
macro_rules! define_tx_repo {
    ($name:ident) => {
        pub struct $name {
            tx: SharedTx,
        }

        impl $name {
            pub(crate) fn new(tx: SharedTx) -> Self {
                Self { tx }
            }
        }
    };
}

define_tx_repo!(TxProductRepository);
define_tx_repo!(TxProductImageRepository);

#[async_trait]
impl ProductWriteRepository for TxProductRepository {
    async fn save(&self, product: &Product) -> StoreResult<()> {
        let mut guard = self.tx.lock().await;
        let tx = guard.as_mut().ok_or_else(transaction_consumed)?;

        upsert_product(&mut **tx, product).await?;
        insert_images(&mut **tx, product).await
    }
}

#[async_trait]
impl ProductImageRepository for TxProductImageRepository {
    async fn delete_by_product(&self, product_id: &ProductId) -> StoreResult<u64> {
        let mut guard = self.tx.lock().await;
        let tx = guard.as_mut().ok_or_else(transaction_consumed)?;

        delete_images(&mut **tx, product_id).await
    }
}
