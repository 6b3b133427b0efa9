//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                 GET   健康检查
//! - /api/document/list        GET   列出所有文档
//! - /api/document/paragraphs  POST  直接加载文档段落（分页）
//! - /api/reader/open          POST  打开阅读会话
//! - /api/reader/select        POST  选择文档（后台加载）
//! - /api/reader/state         POST  会话状态
//! - /api/reader/items         POST  段落分页
//! - /api/reader/scroll        POST  滚动到指定段落
//! - /api/reader/jump          POST  随机跳转
//! - /api/reader/back          POST  返回文档选择
//! - /api/reader/close         POST  关闭会话
//! - /api/asset/query          POST  资源元数据查询
//! - /assets/{cookie}/{path..} GET   资源流

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api", api_routes())
        .route("/assets/*path", get(handlers::stream_asset))
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/document", document_routes())
        .nest("/reader", reader_routes())
        .route("/asset/query", post(handlers::query_asset))
}

/// Document 路由
fn document_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/list", get(handlers::list_documents))
        .route("/paragraphs", post(handlers::load_paragraphs))
}

/// Reader 路由
fn reader_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/open", post(handlers::open_reader))
        .route("/select", post(handlers::select_document))
        .route("/state", post(handlers::reader_state))
        .route("/items", post(handlers::reader_items))
        .route("/scroll", post(handlers::scroll))
        .route("/jump", post(handlers::jump_random))
        .route("/back", post(handlers::back))
        .route("/close", post(handlers::close_reader))
}
