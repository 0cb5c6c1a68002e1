//! Unit of Work trait 定义

use async_trait::async_trait;

use crate::StoreResult;

/// Unit of Work trait
///
/// `commit` 与 `rollback` 都会消耗自身，事务连接随之归还连接池，
/// 因此每个事务只会被释放一次。
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// 提交事务
    async fn commit(self: Box<Self>) -> StoreResult<()>;

    /// 回滚事务
    async fn rollback(self: Box<Self>) -> StoreResult<()>;
}
