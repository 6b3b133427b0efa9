//! Asset Handlers
//!
//! 元数据查询与资源流式输出

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tokio_util::io::{ReaderStream, SyncIoBridge};

use crate::application::{OpenAsset, QueryAssetMetadata};
use crate::infrastructure::adapters::copy_to_pipe;
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 管道缓冲容量
const PIPE_CAPACITY: usize = 64 * 1024;

// ============================================================================
// Metadata query
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AssetQueryRequest {
    pub path: String,
    pub projection: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct AssetQueryResponse {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

pub async fn query_asset(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AssetQueryRequest>,
) -> Result<Json<ApiResponse<AssetQueryResponse>>, ApiError> {
    let query = QueryAssetMetadata {
        path: req.path,
        projection: req.projection,
    };

    let metadata = state.query_asset_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(AssetQueryResponse {
        columns: metadata.columns,
        rows: vec![metadata.row],
    })))
}

// ============================================================================
// Streaming
// ============================================================================

/// GET /assets/{cookie}/{path..}
///
/// 阻塞线程把资源写入管道写端，响应体读取管道读端
pub async fn stream_asset(
    State(state): State<Arc<AppState>>,
    Path(path): Path<String>,
) -> Result<Response, ApiError> {
    let opened = state
        .open_asset_handler
        .handle(OpenAsset {
            path: format!("/{}", path),
        })
        .await?;

    let (read_half, write_half) = tokio::io::duplex(PIPE_CAPACITY);
    let writer = SyncIoBridge::new(write_half);
    let reader = opened.reader;
    let asset = opened.id;

    tokio::task::spawn_blocking(move || match copy_to_pipe(reader, writer) {
        Ok(bytes) => tracing::debug!(asset = %asset, bytes, "Asset streamed"),
        Err(e) => tracing::debug!(asset = %asset, error = %e, "Asset stream aborted"),
    });

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, opened.mime_type)
        .body(Body::from_stream(ReaderStream::new(read_half)))
        .map_err(|e| ApiError::Internal(e.to_string()))
}
