//! 强类型 ID 定义

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use storefront_common::{new_id, parse_uuid};
use uuid::Uuid;

/// 商品 ID
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display, From,
)]
#[display("{_0}")]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new() -> Self {
        Self(new_id())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for ProductId {
    type Err = InvalidProductId;

    /// 只接受带连字符的 UUID 格式，与按 ID 查找的判断一致
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_uuid(s)
            .map(Self)
            .ok_or_else(|| InvalidProductId(s.to_string()))
    }
}

/// 无法解析的商品 ID
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("\"{_0}\" is not a valid product id")]
pub struct InvalidProductId(pub String);

impl std::error::Error for InvalidProductId {}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

/// 商品图片 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
pub struct ProductImageId(pub Uuid);

impl ProductImageId {
    pub fn new() -> Self {
        Self(new_id())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for ProductImageId {
    fn default() -> Self {
        Self::new()
    }
}

/// 商品查找方式
///
/// 查询词符合 UUID 格式时按 ID 查找，否则按 slug 查找，两者互不回退。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductLookup {
    Id(ProductId),
    Slug(String),
}

impl ProductLookup {
    pub fn from_term(term: &str) -> Self {
        match parse_uuid(term) {
            Some(uuid) => Self::Id(ProductId(uuid)),
            None => Self::Slug(term.to_string()),
        }
    }
}
