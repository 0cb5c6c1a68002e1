//! catalog-purge - 清空商品目录
//!
//! 删除全部商品及其图片，用于测试环境数据重置。

use catalog::bootstrap::{build_service, init_telemetry};
use storefront_config::AppConfig;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config_dir = std::env::var("CATALOG_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    let config = AppConfig::load(&config_dir)?;
    let metrics = init_telemetry(&config.telemetry)?;

    if config.is_production() {
        error!(app_env = %config.app_env, "Refusing to purge catalog in production");
        return Err("catalog-purge is disabled in production".into());
    }

    info!(app = %config.app_name, app_env = %config.app_env, "Purging product catalog");

    let service = build_service(&config).await?;
    let deleted = service.delete_all_products().await?;

    info!(deleted, "Product catalog purged");
    debug!(metrics = %metrics.render(), "Catalog metrics");
    Ok(())
}
