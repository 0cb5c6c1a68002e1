//! PostgreSQL 事务管理模块

use sqlx::{PgPool, Postgres, Transaction};
use storefront_ports::{StoreError, StoreResult};
use tracing::debug;

use crate::map_sqlx_error;

/// 事务隔离级别
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IsolationLevel {
    /// 读未提交
    ReadUncommitted,
    /// 读已提交（PostgreSQL 默认）
    #[default]
    ReadCommitted,
    /// 可重复读
    RepeatableRead,
    /// 可串行化
    Serializable,
}

impl IsolationLevel {
    /// 转换为 SQL 字符串
    pub fn as_sql(&self) -> &'static str {
        match self {
            IsolationLevel::ReadUncommitted => "READ UNCOMMITTED",
            IsolationLevel::ReadCommitted => "READ COMMITTED",
            IsolationLevel::RepeatableRead => "REPEATABLE READ",
            IsolationLevel::Serializable => "SERIALIZABLE",
        }
    }
}

/// 事务访问模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AccessMode {
    /// 读写
    #[default]
    ReadWrite,
    /// 只读
    ReadOnly,
}

impl AccessMode {
    /// 转换为 SQL 字符串
    pub fn as_sql(&self) -> &'static str {
        match self {
            AccessMode::ReadWrite => "READ WRITE",
            AccessMode::ReadOnly => "READ ONLY",
        }
    }
}

/// 事务选项
#[derive(Debug, Clone, Default)]
pub struct TransactionOptions {
    /// 隔离级别
    pub isolation_level: IsolationLevel,
    /// 访问模式
    pub access_mode: AccessMode,
}

impl TransactionOptions {
    /// 创建新的事务选项
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置隔离级别
    pub fn with_isolation_level(mut self, level: IsolationLevel) -> Self {
        self.isolation_level = level;
        self
    }

    /// 设置为只读
    pub fn read_only(mut self) -> Self {
        self.access_mode = AccessMode::ReadOnly;
        self
    }

    /// 生成 SET TRANSACTION 语句
    pub fn to_sql(&self) -> String {
        format!(
            "SET TRANSACTION ISOLATION LEVEL {}, {}",
            self.isolation_level.as_sql(),
            self.access_mode.as_sql()
        )
    }
}

/// 事务管理器
#[derive(Debug, Clone)]
pub struct TransactionManager {
    pool: PgPool,
}

impl TransactionManager {
    /// 创建新的事务管理器
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 获取连接池引用
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// 开始事务（从连接池获取专用连接并执行 BEGIN）
    pub async fn begin(&self) -> StoreResult<Transaction<'static, Postgres>> {
        self.pool.begin().await.map_err(map_sqlx_error)
    }

    /// 开始带选项的事务
    pub async fn begin_with_options(
        &self,
        options: &TransactionOptions,
    ) -> StoreResult<Transaction<'static, Postgres>> {
        let mut tx = self.begin().await?;

        sqlx::query(&options.to_sql())
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        debug!(
            isolation = options.isolation_level.as_sql(),
            access = options.access_mode.as_sql(),
            "Transaction started"
        );
        Ok(tx)
    }

    /// 提交事务
    pub async fn commit(tx: Transaction<'static, Postgres>) -> StoreResult<()> {
        tx.commit().await.map_err(map_sqlx_error)
    }

    /// 回滚事务
    pub async fn rollback(tx: Transaction<'static, Postgres>) -> StoreResult<()> {
        tx.rollback().await.map_err(map_sqlx_error)
    }
}

/// 事务已被消耗时返回的错误
pub fn transaction_consumed() -> StoreError {
    StoreError::connection("Transaction already consumed")
}
