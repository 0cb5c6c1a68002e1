//! 商品 slug

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// 商品 slug：唯一、可读的标识
///
/// 统一规范化为小写，空格替换为 `_`，去掉撇号。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
#[serde(transparent)]
pub struct ProductSlug(String);

impl ProductSlug {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase().replace(' ', "_").replace('\'', ""))
    }

    /// 未提供 slug 时由商品名称生成
    pub fn from_name_or(slug: Option<&str>, name: &str) -> Self {
        Self::new(slug.unwrap_or(name))
    }

    /// 从存储中读取的值，已规范化
    pub(crate) fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProductSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
