//! PostgreSQL 持久化实现

mod postgres;
mod postgres_unit_of_work;
mod rows;
mod statements;
mod tx_repositories;

pub use postgres::PostgresProductRepository;
pub use postgres_unit_of_work::{PostgresUnitOfWork, PostgresUnitOfWorkFactory};
pub use tx_repositories::{TxProductImageRepository, TxProductRepository};
