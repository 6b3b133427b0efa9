//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：处理所有读操作

mod asset_queries;
mod document_queries;
mod reader_queries;

pub mod handlers;

pub use asset_queries::*;
pub use document_queries::*;
pub use reader_queries::*;
