//! 通用类型定义

use serde::{Deserialize, Serialize};

/// 默认每页条数
pub const DEFAULT_LIMIT: u32 = 10;

/// 分页默认值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationDefaults {
    pub limit: u32,
    pub offset: u32,
}

impl Default for PaginationDefaults {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// 分页参数（limit / offset）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        PaginationDefaults::default().into()
    }
}

impl From<PaginationDefaults> for Pagination {
    fn from(defaults: PaginationDefaults) -> Self {
        Self {
            limit: defaults.limit,
            offset: defaults.offset,
        }
    }
}

impl Pagination {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }

    /// 用默认值补齐调用方未提供的参数
    pub fn resolve(limit: Option<u32>, offset: Option<u32>, defaults: &PaginationDefaults) -> Self {
        Self {
            limit: limit.unwrap_or(defaults.limit),
            offset: offset.unwrap_or(defaults.offset),
        }
    }
}
