//! 商品图片实体

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ProductImageId;

/// 商品图片
///
/// 只随所属商品一起创建和删除，没有独立的生命周期。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub id: ProductImageId,
    pub url: String,
}

impl ProductImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            id: ProductImageId::new(),
            url: url.into(),
        }
    }
}
