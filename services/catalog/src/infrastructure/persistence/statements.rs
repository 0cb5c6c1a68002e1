//! 连接级别的 SQL 语句
//!
//! 连接池仓储与事务仓储共用，调用方决定语句运行在哪个连接上。

use std::collections::HashMap;

use sqlx::{PgConnection, PgPool};
use storefront_adapter_postgres::map_sqlx_error;
use storefront_ports::{Fetch, StoreError, StoreResult};
use uuid::Uuid;

use super::rows::{ProductImageRow, ProductRow};
use crate::domain::{Product, ProductId, ProductImage};

pub const PRODUCT_COLUMNS: &str =
    "id, name, price, description, slug, stock, sizes, gender, tags";

/// 写入商品行（不存在则插入，存在则覆盖）
pub async fn upsert_product(conn: &mut PgConnection, product: &Product) -> StoreResult<()> {
    sqlx::query(
        r#"
        INSERT INTO products (id, name, price, description, slug, stock, sizes, gender, tags)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        ON CONFLICT (id) DO UPDATE SET
            name = EXCLUDED.name,
            price = EXCLUDED.price,
            description = EXCLUDED.description,
            slug = EXCLUDED.slug,
            stock = EXCLUDED.stock,
            sizes = EXCLUDED.sizes,
            gender = EXCLUDED.gender,
            tags = EXCLUDED.tags
        "#,
    )
    .bind(product.id.0)
    .bind(&product.name)
    .bind(product.price)
    .bind(&product.description)
    .bind(product.slug.as_str())
    .bind(product.stock)
    .bind(&product.sizes)
    .bind(&product.gender)
    .bind(&product.tags)
    .execute(conn)
    .await
    .map_err(map_sqlx_error)?;

    Ok(())
}

/// 插入商品上尚未持久化的图片，已存在的图片行保持不变
pub async fn insert_images(conn: &mut PgConnection, product: &Product) -> StoreResult<()> {
    if product.images.is_empty() {
        return Ok(());
    }

    let ids: Vec<Uuid> = product.images.iter().map(|image| image.id.0).collect();
    let urls: Vec<String> = product.images.iter().map(|image| image.url.clone()).collect();
    let positions = (0..product.images.len())
        .map(|index| i32::try_from(index).map_err(|e| StoreError::decode(e.to_string())))
        .collect::<StoreResult<Vec<i32>>>()?;

    sqlx::query(
        r#"
        INSERT INTO product_images (id, product_id, url, position)
        SELECT image.id, $1, image.url, image.position
        FROM UNNEST($2::uuid[], $3::text[], $4::int4[]) AS image (id, url, position)
        ON CONFLICT (id) DO NOTHING
        "#,
    )
    .bind(product.id.0)
    .bind(&ids)
    .bind(&urls)
    .bind(&positions)
    .execute(conn)
    .await
    .map_err(map_sqlx_error)?;

    Ok(())
}

/// 删除商品的全部图片
pub async fn delete_images(conn: &mut PgConnection, product_id: &ProductId) -> StoreResult<u64> {
    let result = sqlx::query("DELETE FROM product_images WHERE product_id = $1")
        .bind(product_id.0)
        .execute(conn)
        .await
        .map_err(map_sqlx_error)?;

    Ok(result.rows_affected())
}

/// 一次查询加载多个商品的图片，按 position 排序
pub async fn load_images(
    pool: &PgPool,
    product_ids: &[Uuid],
) -> StoreResult<HashMap<Uuid, Vec<ProductImage>>> {
    let rows = sqlx::query_as::<_, ProductImageRow>(
        r#"
        SELECT id, product_id, url
        FROM product_images
        WHERE product_id = ANY($1)
        ORDER BY product_id, position, id
        "#,
    )
    .bind(product_ids)
    .fetch_all(pool)
    .await
    .map_err(map_sqlx_error)?;

    let mut images: HashMap<Uuid, Vec<ProductImage>> = HashMap::new();
    for row in rows {
        images.entry(row.product_id).or_default().push(row.into());
    }
    Ok(images)
}

/// 把商品行转换为实体，按加载策略附带图片
pub async fn hydrate(
    pool: &PgPool,
    rows: Vec<ProductRow>,
    fetch: Fetch,
) -> StoreResult<Vec<Product>> {
    if !fetch.is_eager() || rows.is_empty() {
        return Ok(rows
            .into_iter()
            .map(|row| row.into_product(Vec::new()))
            .collect());
    }

    let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
    let mut images = load_images(pool, &ids).await?;

    Ok(rows
        .into_iter()
        .map(|row| {
            let product_images = images.remove(&row.id).unwrap_or_default();
            row.into_product(product_images)
        })
        .collect())
}
