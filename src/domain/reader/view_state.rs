//! Reader Context - View State Machine
//!
//! Selecting -> Loading -> Displaying，加载期间拒绝新的选择

use serde::Serialize;
use uuid::Uuid;

use super::ViewStateError;
use crate::domain::document::DocumentId;

/// 阅读视图状态
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewState {
    /// 显示文档选择列表
    Selecting,
    /// 后台加载中
    Loading { document_id: DocumentId, load_id: Uuid },
    /// 显示段落列表
    Displaying { document_id: DocumentId },
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::Selecting
    }
}

impl ViewState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewState::Selecting => "selecting",
            ViewState::Loading { .. } => "loading",
            ViewState::Displaying { .. } => "displaying",
        }
    }

    pub fn document_id(&self) -> Option<&DocumentId> {
        match self {
            ViewState::Selecting => None,
            ViewState::Loading { document_id, .. } | ViewState::Displaying { document_id } => {
                Some(document_id)
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading { .. })
    }

    /// 开始加载，返回本次加载的 ID
    pub fn begin_load(&mut self, document_id: DocumentId) -> Result<Uuid, ViewStateError> {
        if let ViewState::Loading { load_id, .. } = self {
            return Err(ViewStateError::LoadInProgress(*load_id));
        }
        let load_id = Uuid::new_v4();
        *self = ViewState::Loading {
            document_id,
            load_id,
        };
        Ok(load_id)
    }

    /// 加载完成，进入显示状态
    pub fn finish_load(&mut self, load_id: Uuid) -> Result<DocumentId, ViewStateError> {
        let document_id = self.take_loading(load_id)?;
        *self = ViewState::Displaying {
            document_id: document_id.clone(),
        };
        Ok(document_id)
    }

    /// 加载失败，回到选择状态
    pub fn fail_load(&mut self, load_id: Uuid) -> Result<DocumentId, ViewStateError> {
        let document_id = self.take_loading(load_id)?;
        *self = ViewState::Selecting;
        Ok(document_id)
    }

    pub fn back(&mut self) {
        *self = ViewState::Selecting;
    }

    fn take_loading(&self, actual: Uuid) -> Result<DocumentId, ViewStateError> {
        match self {
            ViewState::Loading {
                document_id,
                load_id,
            } if *load_id == actual => Ok(document_id.clone()),
            ViewState::Loading { load_id, .. } => Err(ViewStateError::StaleLoad {
                expected: *load_id,
                actual,
            }),
            _ => Err(ViewStateError::NotLoading),
        }
    }
}
