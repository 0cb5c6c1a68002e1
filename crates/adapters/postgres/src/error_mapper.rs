//! 数据库错误映射工具
//!
//! 把 `sqlx::Error` 的各种形态归一化为 [`StoreError`]

use sqlx::postgres::PgDatabaseError;
use storefront_ports::StoreError;

/// PostgreSQL unique_violation 错误码
pub const UNIQUE_VIOLATION: &str = "23505";

/// 唯一约束冲突时 PostgreSQL 消息中的标记
pub const DUPLICATE_KEY_MARKER: &str = "duplicate key value";

/// 将 SQLx 错误转换为 StoreError
pub fn map_sqlx_error(e: sqlx::Error) -> StoreError {
    match e {
        sqlx::Error::Database(db_err) => {
            let code = db_err.code().map(|c| c.into_owned());
            let message = db_err.message().to_string();

            let is_unique = db_err.is_unique_violation()
                || code.as_deref() == Some(UNIQUE_VIOLATION)
                || message.contains(DUPLICATE_KEY_MARKER);

            if is_unique {
                // 优先使用 DETAIL，例如 `Key (slug)=(shirt) already exists.`
                let detail = db_err
                    .try_downcast_ref::<PgDatabaseError>()
                    .and_then(|pg| pg.detail())
                    .map(str::to_string)
                    .unwrap_or(message);

                StoreError::UniqueViolation {
                    constraint: db_err.constraint().map(str::to_string),
                    detail,
                }
            } else {
                StoreError::Query { code, message }
            }
        }
        sqlx::Error::PoolTimedOut => StoreError::connection("Database connection pool timeout"),
        sqlx::Error::PoolClosed => StoreError::connection("Database connection pool is closed"),
        sqlx::Error::Io(io) => StoreError::connection(format!("Database I/O error: {}", io)),
        sqlx::Error::Tls(tls) => StoreError::connection(format!("Database TLS error: {}", tls)),
        sqlx::Error::Protocol(msg) => {
            StoreError::connection(format!("Database protocol error: {}", msg))
        }
        e @ (sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::Decode(_)
        | sqlx::Error::TypeNotFound { .. }) => StoreError::decode(e.to_string()),
        e => StoreError::query(None, e.to_string()),
    }
}
