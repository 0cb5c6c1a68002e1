//! 数据库行结构

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::{Product, ProductId, ProductImage, ProductImageId, ProductSlug};

#[derive(Debug, sqlx::FromRow)]
pub struct ProductRow {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub slug: String,
    pub stock: i32,
    pub sizes: Vec<String>,
    pub gender: String,
    pub tags: Vec<String>,
}

impl ProductRow {
    pub fn into_product(self, images: Vec<ProductImage>) -> Product {
        Product {
            id: ProductId(self.id),
            name: self.name,
            price: self.price,
            description: self.description,
            slug: ProductSlug::from_stored(self.slug),
            stock: self.stock,
            sizes: self.sizes,
            gender: self.gender,
            tags: self.tags,
            images,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct ProductImageRow {
    pub id: Uuid,
    pub product_id: Uuid,
    pub url: String,
}

impl From<ProductImageRow> for ProductImage {
    fn from(row: ProductImageRow) -> Self {
        Self {
            id: ProductImageId(row.id),
            url: row.url,
        }
    }
}
