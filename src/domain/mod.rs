//! Domain Layer - 领域层
//!
//! 包含四个限界上下文:
//! - Document Context: 源文档
//! - Paragraph Context: 段落加载
//! - Reader Context: 视图状态与列表展示
//! - Asset Context: 资源标识与元数据

pub mod asset;
pub mod document;
pub mod paragraph;
pub mod reader;
