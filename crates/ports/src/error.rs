//! 存储层错误
//!
//! 适配器负责把驱动错误归一化为 [`StoreError`]，上层只需匹配枚举即可。

use thiserror::Error;

/// 存储层错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// 唯一约束冲突
    #[error("Unique constraint violation: {detail}")]
    UniqueViolation {
        constraint: Option<String>,
        detail: String,
    },

    /// 连接或连接池错误
    #[error("Connection error: {0}")]
    Connection(String),

    /// 其他查询错误
    #[error("Query error ({}): {message}", .code.as_deref().unwrap_or("-"))]
    Query {
        code: Option<String>,
        message: String,
    },

    /// 行数据解码失败
    #[error("Decode error: {0}")]
    Decode(String),
}

impl StoreError {
    pub fn unique_violation(detail: impl Into<String>) -> Self {
        Self::UniqueViolation {
            constraint: None,
            detail: detail.into(),
        }
    }

    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    pub fn query(code: Option<String>, message: impl Into<String>) -> Self {
        Self::Query {
            code,
            message: message.into(),
        }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// 用于日志与指标的错误类别
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UniqueViolation { .. } => "unique_violation",
            Self::Connection(_) => "connection",
            Self::Query { .. } => "query",
            Self::Decode(_) => "decode",
        }
    }
}

/// Result 类型别名
pub type StoreResult<T> = Result<T, StoreError>;
