//! 对外输出的商品视图

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{Product, ProductId};

/// 商品视图，图片只以有序 URL 列表的形式暴露
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub slug: String,
    pub stock: i32,
    pub sizes: Vec<String>,
    pub gender: String,
    pub tags: Vec<String>,
    pub images: Vec<String>,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        let images = product.image_urls();

        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            description: product.description,
            slug: product.slug.as_str().to_string(),
            stock: product.stock,
            sizes: product.sizes,
            gender: product.gender,
            tags: product.tags,
            images,
        }
    }
}
