//! 应用层

pub mod commands;
pub mod dto;
pub mod queries;
pub mod service;

pub use commands::*;
pub use dto::*;
pub use queries::*;
pub use service::*;
