//! Reader Commands - 阅读会话相关命令

use uuid::Uuid;

/// 打开阅读会话命令
#[derive(Debug, Clone)]
pub struct OpenReaderCommand;

/// 打开阅读会话响应
#[derive(Debug, Clone)]
pub struct OpenReaderResponse {
    pub session_id: String,
}

/// 选择文档命令 - 进入加载状态并提交后台加载
#[derive(Debug, Clone)]
pub struct SelectDocumentCommand {
    pub session_id: String,
    pub document_id: String,
}

/// 选择文档响应
#[derive(Debug, Clone)]
pub struct SelectDocumentResponse {
    pub session_id: String,
    pub document_id: String,
    pub load_id: Uuid,
}

/// 滚动命令
#[derive(Debug, Clone)]
pub struct ScrollCommand {
    pub session_id: String,
    pub index: usize,
}

/// 滚动响应
#[derive(Debug, Clone)]
pub struct ScrollResponse {
    pub session_id: String,
    pub scroll_position: usize,
}

/// 随机跳转命令
#[derive(Debug, Clone)]
pub struct JumpRandomCommand {
    pub session_id: String,
}

/// 随机跳转响应
#[derive(Debug, Clone)]
pub struct JumpRandomResponse {
    pub session_id: String,
    pub selection: usize,
    pub message: String,
}

/// 返回选择命令
#[derive(Debug, Clone)]
pub struct BackCommand {
    pub session_id: String,
}

/// 关闭会话命令
#[derive(Debug, Clone)]
pub struct CloseReaderCommand {
    pub session_id: String,
}

/// 关闭会话响应
#[derive(Debug, Clone)]
pub struct CloseReaderResponse {
    pub session_id: String,
}
