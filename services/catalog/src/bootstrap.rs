//! 服务装配
//!
//! 统一从配置创建连接池、仓储与工作单元工厂

use std::sync::Arc;
use std::time::Duration;

use metrics_exporter_prometheus::PrometheusHandle;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use storefront_adapter_postgres::{
    IsolationLevel, PostgresConfig, TransactionOptions, check_connection, create_pool,
};
use storefront_common::PaginationDefaults;
use storefront_config::{AppConfig, TelemetryConfig};
use storefront_errors::{AppError, AppResult};
use storefront_telemetry::{TelemetryError, init_metrics, init_tracing, init_tracing_json};
use tracing::info;

use crate::application::ProductCatalogService;
use crate::infrastructure::persistence::{PostgresProductRepository, PostgresUnitOfWorkFactory};

/// 从配置创建商品目录服务
pub async fn build_service(config: &AppConfig) -> AppResult<ProductCatalogService> {
    let pg_config = PostgresConfig::new(config.database.url.expose_secret())
        .with_max_connections(config.database.max_connections)
        .with_connect_timeout(Duration::from_secs(config.database.connect_timeout_secs));

    let pool = create_pool(&pg_config)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    check_connection(&pool)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    info!(
        app = %config.app_name,
        max_connections = config.database.max_connections,
        "PostgreSQL connection pool created"
    );

    Ok(service_from_pool(pool, config.catalog.pagination_defaults()))
}

/// 基于已有连接池装配服务
pub fn service_from_pool(pool: PgPool, defaults: PaginationDefaults) -> ProductCatalogService {
    let product_repo = Arc::new(PostgresProductRepository::new(pool.clone()));
    let uow_factory = Arc::new(
        PostgresUnitOfWorkFactory::new(pool).with_options(
            TransactionOptions::new().with_isolation_level(IsolationLevel::ReadCommitted),
        ),
    );

    ProductCatalogService::new(product_repo, uow_factory).with_pagination_defaults(defaults)
}

/// 按配置初始化日志与 metrics recorder
pub fn init_telemetry(config: &TelemetryConfig) -> Result<PrometheusHandle, TelemetryError> {
    if config.json {
        init_tracing_json(&config.log_level)?;
    } else {
        init_tracing(&config.log_level)?;
    }

    init_metrics()
}
