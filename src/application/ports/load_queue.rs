//! Load Queue Port - 后台加载队列
//!
//! 选择文档后提交加载请求，由后台 Worker 消费

use thiserror::Error;
use uuid::Uuid;

use crate::domain::document::SourceDocument;

/// Load Queue 错误
#[derive(Debug, Error)]
pub enum LoadQueueError {
    #[error("Load queue is full")]
    Full,

    #[error("Load queue is closed")]
    Closed,
}

/// 加载请求
#[derive(Debug, Clone)]
pub struct LoadRequest {
    pub session_id: String,
    pub load_id: Uuid,
    pub document: SourceDocument,
}

/// Load Queue Port
pub trait LoadQueuePort: Send + Sync {
    /// 提交加载请求（不阻塞）
    fn submit(&self, request: LoadRequest) -> Result<(), LoadQueueError>;
}
