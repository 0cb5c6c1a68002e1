//! storefront-config - 配置加载库

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::Deserialize;
use storefront_common::PaginationDefaults;
use thiserror::Error;

use secrecy::Secret;

/// 环境变量前缀，嵌套键使用 `__` 分隔，例如 `STOREFRONT_DATABASE__URL`
pub const ENV_PREFIX: &str = "STOREFRONT_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),
}

/// 数据库配置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: Secret<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_max_connections() -> u32 {
    // 开发环境: 10, 生产环境: 50
    match std::env::var("APP_ENV").as_deref() {
        Ok("production") => 50,
        _ => 10,
    }
}

fn default_connect_timeout_secs() -> u64 {
    30
}

/// 遥测配置
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// 是否输出 JSON 格式日志
    #[serde(default)]
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// 商品目录配置
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_limit")]
    pub default_limit: u32,
    #[serde(default)]
    pub default_offset: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            default_offset: 0,
        }
    }
}

fn default_limit() -> u32 {
    storefront_common::DEFAULT_LIMIT
}

impl CatalogConfig {
    /// 分页默认值
    pub fn pagination_defaults(&self) -> PaginationDefaults {
        PaginationDefaults {
            limit: self.default_limit,
            offset: self.default_offset,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

fn default_app_env() -> String {
    "development".to_string()
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| default_app_env());

        let config: Self = Figment::new()
            .merge(Toml::file(format!("{}/default.toml", config_dir)))
            .merge(Toml::file(format!("{}/{}.toml", config_dir, env)))
            // app_env 始终与 APP_ENV 一致，不由配置文件决定
            .merge(Serialized::default("app_env", &env))
            .merge(Env::prefixed(ENV_PREFIX).split("__").ignore(&["app_env"]))
            .extract()?;

        Ok(config)
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }
}
