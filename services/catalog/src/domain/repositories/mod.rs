//! 仓储接口

mod product_image_repository;
mod product_repository;

pub use product_image_repository::*;
pub use product_repository::*;
