//! ports - 抽象 trait 层
//!
//! 定义持久化层的抽象接口与存储错误类型

mod error;
mod repository;
mod unit_of_work;

pub use error::*;
pub use repository::*;
pub use unit_of_work::*;
