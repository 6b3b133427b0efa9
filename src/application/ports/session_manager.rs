//! Session Manager Port - 阅读会话生命周期管理
//!
//! 会话持有视图状态与列表展示器，所有状态存储在内存中

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::document::DocumentId;
use crate::domain::paragraph::ParagraphSequence;
use crate::domain::reader::{ListPresenter, PresenterError, ViewState, ViewStateError};

/// Session Manager 错误
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    ViewState(#[from] ViewStateError),

    #[error(transparent)]
    Presenter(#[from] PresenterError),
}

/// 阅读会话（in-memory）
#[derive(Debug, Clone)]
pub struct ReaderSession {
    pub id: String,
    pub state: ViewState,
    pub presenter: ListPresenter,
    pub last_error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl ReaderSession {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            state: ViewState::Selecting,
            presenter: ListPresenter::new(),
            last_error: None,
            created_at: now,
            last_activity: now,
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id.clone(),
            state: self.state.clone(),
            count: self.presenter.count(),
            scroll_position: self.presenter.scroll_position(),
            last_error: self.last_error.clone(),
        }
    }
}

impl Default for ReaderSession {
    fn default() -> Self {
        Self::new()
    }
}

/// 会话概要（不含段落内容）
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub id: String,
    pub state: ViewState,
    pub count: usize,
    pub scroll_position: usize,
    pub last_error: Option<String>,
}

/// 段落分页
#[derive(Debug, Clone)]
pub struct ItemsPage {
    pub start: usize,
    pub total: usize,
    pub items: Vec<String>,
}

/// Session Manager Port
pub trait SessionManagerPort: Send + Sync {
    /// 创建新会话（初始为选择状态）
    fn create(&self) -> String;

    /// 获取会话概要
    fn summary(&self, id: &str) -> Result<SessionSummary, SessionError>;

    /// 开始加载文档，返回本次加载 ID
    fn begin_load(&self, id: &str, document_id: DocumentId) -> Result<Uuid, SessionError>;

    /// 加载完成，绑定段落序列
    fn complete_load(
        &self,
        id: &str,
        load_id: Uuid,
        paragraphs: ParagraphSequence,
    ) -> Result<(), SessionError>;

    /// 加载失败，回到选择状态
    fn fail_load(&self, id: &str, load_id: Uuid, error: String) -> Result<(), SessionError>;

    /// 分页获取当前段落
    fn items(&self, id: &str, start: usize, limit: usize) -> Result<ItemsPage, SessionError>;

    /// 滚动到指定位置
    fn scroll_to(&self, id: &str, index: usize) -> Result<usize, SessionError>;

    /// 随机跳转
    fn jump_to_random(&self, id: &str) -> Result<Option<usize>, SessionError>;

    /// 返回选择状态，丢弃当前段落
    fn back(&self, id: &str) -> Result<(), SessionError>;

    /// 检查会话是否有效
    fn is_valid(&self, id: &str) -> bool;

    /// 关闭会话
    fn close(&self, id: &str) -> Result<(), SessionError>;

    /// 获取所有过期会话的 ID
    fn get_expired_sessions(&self, idle_timeout_secs: u64) -> Vec<String>;

    /// 会话仍处于空闲过期状态时关闭，返回是否已关闭
    fn close_if_idle(&self, id: &str, idle_timeout_secs: u64) -> bool;
}
