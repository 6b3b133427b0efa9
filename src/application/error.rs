//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{LoadQueueError, SessionError};
use crate::domain::asset::AssetError;
use crate::domain::document::DocumentError;
use crate::domain::reader::ViewStateError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 状态冲突（如加载进行中）
    #[error("Conflict: {0}")]
    Conflict(String),

    /// 状态无效
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// 存储错误
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建状态无效错误
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<DocumentError> for ApplicationError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::InvalidId(msg) | DocumentError::InvalidTitle(msg) => {
                Self::ValidationError(msg)
            }
            DocumentError::FileReadError(msg) | DocumentError::ManifestError(msg) => {
                Self::StorageError(msg)
            }
        }
    }
}

impl From<AssetError> for ApplicationError {
    fn from(err: AssetError) -> Self {
        match err {
            AssetError::NotFound(path) => Self::not_found("Asset", path),
        }
    }
}

impl From<SessionError> for ApplicationError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NotFound(id) => Self::not_found("Session", id),
            SessionError::ViewState(e @ ViewStateError::LoadInProgress(_)) => {
                Self::Conflict(e.to_string())
            }
            SessionError::ViewState(e) => Self::InvalidState(e.to_string()),
            SessionError::Presenter(e) => Self::ValidationError(e.to_string()),
        }
    }
}

impl From<LoadQueueError> for ApplicationError {
    fn from(err: LoadQueueError) -> Self {
        Self::InternalError(err.to_string())
    }
}
