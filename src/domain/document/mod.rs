//! Document Context - 文档限界上下文
//!
//! 职责:
//! - 源文档标识与标题
//! - 文档库条目

mod entities;
mod errors;
mod value_objects;

pub use entities::SourceDocument;
pub use errors::DocumentError;
pub use value_objects::{DocumentId, DocumentPath, Title};
