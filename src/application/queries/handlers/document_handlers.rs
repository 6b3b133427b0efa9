//! Document Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::loading::load_document;
use crate::application::ports::DocumentLibraryPort;
use crate::application::queries::{ListDocuments, LoadParagraphs};
use crate::domain::document::{DocumentId, SourceDocument};
use crate::domain::paragraph::LoadOptions;

// ============================================================================
// Response DTOs
// ============================================================================

/// 文档条目响应
#[derive(Debug, Clone)]
pub struct DocumentResponse {
    pub id: String,
    pub title: String,
}

impl From<SourceDocument> for DocumentResponse {
    fn from(document: SourceDocument) -> Self {
        Self {
            id: document.id().to_string(),
            title: document.title().to_string(),
        }
    }
}

/// 段落分页响应
#[derive(Debug, Clone)]
pub struct ParagraphsPage {
    pub document_id: String,
    pub start: usize,
    pub total: usize,
    pub paragraphs: Vec<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// ListDocuments Handler
pub struct ListDocumentsHandler {
    library: Arc<dyn DocumentLibraryPort>,
}

impl ListDocumentsHandler {
    pub fn new(library: Arc<dyn DocumentLibraryPort>) -> Self {
        Self { library }
    }

    pub async fn handle(
        &self,
        _query: ListDocuments,
    ) -> Result<Vec<DocumentResponse>, ApplicationError> {
        let documents = self.library.list().await?;
        Ok(documents.into_iter().map(DocumentResponse::from).collect())
    }
}

/// LoadParagraphs Handler - 不经过会话直接加载
pub struct LoadParagraphsHandler {
    library: Arc<dyn DocumentLibraryPort>,
    options: LoadOptions,
    page_limit: usize,
}

impl LoadParagraphsHandler {
    pub fn new(library: Arc<dyn DocumentLibraryPort>, options: LoadOptions, page_limit: usize) -> Self {
        Self {
            library,
            options,
            page_limit,
        }
    }

    pub async fn handle(&self, query: LoadParagraphs) -> Result<ParagraphsPage, ApplicationError> {
        let document_id = DocumentId::new(query.document_id)?;
        let document = self
            .library
            .find(&document_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Document", document_id.to_string()))?;

        let paragraphs =
            load_document(self.library.clone(), document, self.options.clone()).await?;

        let start = query.start_index.unwrap_or(0);
        let limit = query.limit.unwrap_or(self.page_limit).min(self.page_limit);

        Ok(ParagraphsPage {
            document_id: document_id.to_string(),
            start,
            total: paragraphs.len(),
            paragraphs: paragraphs.range(start, limit).to_vec(),
        })
    }
}
