//! Document Library Port - 文档库抽象
//!
//! 定义源文档的列举与打开接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use std::io::BufRead;

use crate::domain::document::{DocumentError, DocumentId, SourceDocument};

/// Document Library Port
#[async_trait]
pub trait DocumentLibraryPort: Send + Sync {
    /// 按展示顺序列出所有文档
    async fn list(&self) -> Result<Vec<SourceDocument>, DocumentError>;

    /// 查找文档
    async fn find(&self, id: &DocumentId) -> Result<Option<SourceDocument>, DocumentError>;

    /// 打开文档文本流（阻塞调用，须在阻塞线程中使用）
    fn open(&self, document: &SourceDocument) -> Result<Box<dyn BufRead + Send>, DocumentError>;
}
