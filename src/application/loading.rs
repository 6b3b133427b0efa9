//! 段落加载用例
//!
//! 在阻塞线程池中打开文档并切分段落，以 Future 形式返回结果

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::DocumentLibraryPort;
use crate::domain::document::SourceDocument;
use crate::domain::paragraph::{load_paragraphs, LoadOptions, ParagraphSequence};

/// 异步加载文档段落
///
/// 打开失败返回错误；读取或解码失败只记录日志并返回部分结果
pub async fn load_document(
    library: Arc<dyn DocumentLibraryPort>,
    document: SourceDocument,
    options: LoadOptions,
) -> Result<ParagraphSequence, ApplicationError> {
    let document_id = document.id().clone();

    let paragraphs = tokio::task::spawn_blocking(move || {
        let reader = library.open(&document)?;
        Ok::<_, ApplicationError>(load_paragraphs(reader, &options))
    })
    .await
    .map_err(|e| ApplicationError::internal(format!("Load task panicked: {}", e)))??;

    tracing::info!(
        document_id = %document_id,
        paragraphs = paragraphs.len(),
        "Document loaded"
    );

    Ok(paragraphs)
}
