//! Asset Context - 资源上下文
//!
//! 职责:
//! - 资源标识解析（cookie + 包内路径）
//! - 元数据查询（显示名 + 占位大小）

mod errors;
mod identifier;
mod metadata;

pub use errors::AssetError;
pub use identifier::AssetId;
pub use metadata::{AssetMetadata, COLUMN_DISPLAY_NAME, COLUMN_SIZE, PLACEHOLDER_SIZE};
