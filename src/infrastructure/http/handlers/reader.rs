//! Reader Session Handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{
    BackCommand, CloseReaderCommand, GetReaderItems, GetReaderState, JumpRandomCommand,
    OpenReaderCommand, ScrollCommand, SelectDocumentCommand,
};
use crate::infrastructure::http::dto::{ApiResponse, Empty};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 仅包含会话 ID 的请求
#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct SessionIdResponse {
    pub session_id: String,
}

// ============================================================================
// Open
// ============================================================================

pub async fn open_reader(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<SessionIdResponse>>, ApiError> {
    let result = state.open_reader_handler.handle(OpenReaderCommand).await?;

    Ok(Json(ApiResponse::success(SessionIdResponse {
        session_id: result.session_id,
    })))
}

// ============================================================================
// Select
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub session_id: String,
    pub document_id: String,
}

#[derive(Debug, Serialize)]
pub struct SelectResponseDto {
    pub session_id: String,
    pub document_id: String,
    pub load_id: Uuid,
    pub state: &'static str,
}

pub async fn select_document(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SelectRequest>,
) -> Result<Json<ApiResponse<SelectResponseDto>>, ApiError> {
    let cmd = SelectDocumentCommand {
        session_id: req.session_id,
        document_id: req.document_id,
    };

    let result = state.select_document_handler.handle(cmd).await?;

    Ok(Json(ApiResponse::success(SelectResponseDto {
        session_id: result.session_id,
        document_id: result.document_id,
        load_id: result.load_id,
        state: "loading",
    })))
}

// ============================================================================
// State
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ReaderStateResponse {
    pub session_id: String,
    pub state: &'static str,
    pub document_id: Option<String>,
    pub count: usize,
    pub scroll_position: usize,
    pub last_error: Option<String>,
}

pub async fn reader_state(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SessionRequest>,
) -> Result<Json<ApiResponse<ReaderStateResponse>>, ApiError> {
    let summary = state
        .get_reader_state_handler
        .handle(GetReaderState {
            session_id: req.session_id,
        })
        .await?;

    Ok(Json(ApiResponse::success(ReaderStateResponse {
        session_id: summary.id,
        state: summary.state.as_str(),
        document_id: summary.state.document_id().map(|id| id.to_string()),
        count: summary.count,
        scroll_position: summary.scroll_position,
        last_error: summary.last_error,
    })))
}

// ============================================================================
// Items
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ItemsRequest {
    pub session_id: String,
    pub start: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub start: usize,
    pub total: usize,
    pub items: Vec<String>,
}

pub async fn reader_items(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ItemsRequest>,
) -> Result<Json<ApiResponse<ItemsResponse>>, ApiError> {
    let query = GetReaderItems {
        session_id: req.session_id,
        start_index: req.start,
        limit: req.limit,
    };

    let page = state.get_reader_items_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(ItemsResponse {
        start: page.start,
        total: page.total,
        items: page.items,
    })))
}

// ============================================================================
// Scroll / Jump
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ScrollRequest {
    pub session_id: String,
    pub index: usize,
}

#[derive(Debug, Serialize)]
pub struct ScrollResponseDto {
    pub session_id: String,
    pub scroll_position: usize,
}

pub async fn scroll(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScrollRequest>,
) -> Result<Json<ApiResponse<ScrollResponseDto>>, ApiError> {
    let cmd = ScrollCommand {
        session_id: req.session_id,
        index: req.index,
    };

    let result = state.scroll_handler.handle(cmd).await?;

    Ok(Json(ApiResponse::success(ScrollResponseDto {
        session_id: result.session_id,
        scroll_position: result.scroll_position,
    })))
}

#[derive(Debug, Serialize)]
pub struct JumpResponseDto {
    pub session_id: String,
    pub selection: usize,
    pub message: String,
}

pub async fn jump_random(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SessionRequest>,
) -> Result<Json<ApiResponse<JumpResponseDto>>, ApiError> {
    let result = state
        .jump_random_handler
        .handle(JumpRandomCommand {
            session_id: req.session_id,
        })
        .await?;

    Ok(Json(ApiResponse::success(JumpResponseDto {
        session_id: result.session_id,
        selection: result.selection,
        message: result.message,
    })))
}

// ============================================================================
// Back / Close
// ============================================================================

pub async fn back(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SessionRequest>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    state
        .back_handler
        .handle(BackCommand {
            session_id: req.session_id,
        })
        .await?;

    Ok(Json(ApiResponse::ok()))
}

pub async fn close_reader(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SessionRequest>,
) -> Result<Json<ApiResponse<SessionIdResponse>>, ApiError> {
    let result = state
        .close_reader_handler
        .handle(CloseReaderCommand {
            session_id: req.session_id,
        })
        .await?;

    Ok(Json(ApiResponse::success(SessionIdResponse {
        session_id: result.session_id,
    })))
}
