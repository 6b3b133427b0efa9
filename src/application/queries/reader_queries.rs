//! Reader Queries

/// 获取会话视图状态
#[derive(Debug, Clone)]
pub struct GetReaderState {
    pub session_id: String,
}

/// 分页获取会话当前段落
#[derive(Debug, Clone)]
pub struct GetReaderItems {
    pub session_id: String,
    pub start_index: Option<usize>,
    pub limit: Option<usize>,
}
