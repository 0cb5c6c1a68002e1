//! PostgreSQL implementation of ProductRepository

use async_trait::async_trait;
use sqlx::PgPool;
use storefront_adapter_postgres::map_sqlx_error;
use storefront_common::Pagination;
use storefront_ports::{Fetch, PageableRepository, Repository, StoreResult};
use tracing::debug;

use super::rows::ProductRow;
use super::statements::{PRODUCT_COLUMNS, hydrate, insert_images, upsert_product};
use crate::domain::{Product, ProductId, ProductRepository};

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn hydrate_one(
        &self,
        row: Option<ProductRow>,
        fetch: Fetch,
    ) -> StoreResult<Option<Product>> {
        let Some(row) = row else {
            return Ok(None);
        };

        Ok(hydrate(&self.pool, vec![row], fetch).await?.pop())
    }
}

#[async_trait]
impl Repository<Product, ProductId> for PostgresProductRepository {
    async fn find_by_id(&self, id: &ProductId, fetch: Fetch) -> StoreResult<Option<Product>> {
        let sql = format!("SELECT {} FROM products WHERE id = $1", PRODUCT_COLUMNS);

        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        self.hydrate_one(row, fetch).await
    }

    async fn save(&self, product: &Product) -> StoreResult<()> {
        // 商品行与图片行在同一事务中写入
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        upsert_product(&mut tx, product).await?;
        insert_images(&mut tx, product).await?;

        tx.commit().await.map_err(map_sqlx_error)?;

        debug!(product_id = %product.id, images = product.images.len(), "Product saved");
        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, id: &ProductId) -> StoreResult<bool> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
                .bind(id.0)
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(exists)
    }
}

#[async_trait]
impl PageableRepository<Product, ProductId> for PostgresProductRepository {
    async fn find_all(&self, pagination: &Pagination, fetch: Fetch) -> StoreResult<Vec<Product>> {
        // UUID v7 按创建时间有序，按 id 排序即可得到稳定的分页
        let sql = format!(
            "SELECT {} FROM products ORDER BY id LIMIT $1 OFFSET $2",
            PRODUCT_COLUMNS
        );

        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(i64::from(pagination.limit))
            .bind(i64::from(pagination.offset))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        hydrate(&self.pool, rows, fetch).await
    }

    async fn count(&self) -> StoreResult<u64> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(total.max(0) as u64)
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_by_slug(&self, slug: &str, fetch: Fetch) -> StoreResult<Option<Product>> {
        let sql = format!("SELECT {} FROM products WHERE slug = $1", PRODUCT_COLUMNS);

        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        self.hydrate_one(row, fetch).await
    }

    async fn delete_all(&self) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }
}
