//! Document Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("无效的文档 ID: {0}")]
    InvalidId(String),

    #[error("无效的标题: {0}")]
    InvalidTitle(String),

    #[error("文件读取错误: {0}")]
    FileReadError(String),

    #[error("文档清单错误: {0}")]
    ManifestError(String),
}
