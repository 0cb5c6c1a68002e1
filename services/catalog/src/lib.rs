//! catalog - 商品目录服务
//!
//! 商品（含图片）的创建、分页查询、按 ID 或 slug 查找、更新与删除。

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;

pub use application::ProductCatalogService;
