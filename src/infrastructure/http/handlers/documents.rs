//! Document Handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::{DocumentResponse, ListDocuments, LoadParagraphs};
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

// ============================================================================
// DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct DocumentDto {
    pub id: String,
    pub title: String,
}

impl From<DocumentResponse> for DocumentDto {
    fn from(doc: DocumentResponse) -> Self {
        Self {
            id: doc.id,
            title: doc.title,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DocumentListResponse {
    pub documents: Vec<DocumentDto>,
}

#[derive(Debug, Deserialize)]
pub struct LoadParagraphsRequest {
    pub document_id: String,
    pub start: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ParagraphsResponse {
    pub document_id: String,
    pub start: usize,
    pub total: usize,
    pub paragraphs: Vec<String>,
}

// ============================================================================
// Handlers
// ============================================================================

pub async fn list_documents(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<DocumentListResponse>>, ApiError> {
    let documents = state.list_documents_handler.handle(ListDocuments).await?;

    Ok(Json(ApiResponse::success(DocumentListResponse {
        documents: documents.into_iter().map(DocumentDto::from).collect(),
    })))
}

/// 直接加载文档并分页返回段落（不绑定会话）
pub async fn load_paragraphs(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoadParagraphsRequest>,
) -> Result<Json<ApiResponse<ParagraphsResponse>>, ApiError> {
    let query = LoadParagraphs {
        document_id: req.document_id,
        start_index: req.start,
        limit: req.limit,
    };

    let page = state.load_paragraphs_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(ParagraphsResponse {
        document_id: page.document_id,
        start: page.start,
        total: page.total,
        paragraphs: page.paragraphs,
    })))
}
