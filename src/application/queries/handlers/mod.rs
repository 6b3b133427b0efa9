//! Query Handlers 实现

mod asset_handlers;
mod document_handlers;
mod reader_handlers;

pub use asset_handlers::*;
pub use document_handlers::*;
pub use reader_handlers::*;
