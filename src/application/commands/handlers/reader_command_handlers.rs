//! Reader Command Handlers

use std::sync::Arc;

use crate::application::commands::reader_commands::*;
use crate::application::error::ApplicationError;
use crate::application::ports::{
    DocumentLibraryPort, LoadQueuePort, LoadRequest, SessionManagerPort,
};
use crate::domain::document::DocumentId;
use crate::domain::reader::jump_message;

/// OpenReader Handler - 创建新会话
pub struct OpenReaderHandler {
    session_manager: Arc<dyn SessionManagerPort>,
}

impl OpenReaderHandler {
    pub fn new(session_manager: Arc<dyn SessionManagerPort>) -> Self {
        Self { session_manager }
    }

    pub async fn handle(
        &self,
        _cmd: OpenReaderCommand,
    ) -> Result<OpenReaderResponse, ApplicationError> {
        let session_id = self.session_manager.create();
        Ok(OpenReaderResponse { session_id })
    }
}

/// SelectDocument Handler - 进入加载状态并提交后台加载
pub struct SelectDocumentHandler {
    session_manager: Arc<dyn SessionManagerPort>,
    library: Arc<dyn DocumentLibraryPort>,
    load_queue: Arc<dyn LoadQueuePort>,
}

impl SelectDocumentHandler {
    pub fn new(
        session_manager: Arc<dyn SessionManagerPort>,
        library: Arc<dyn DocumentLibraryPort>,
        load_queue: Arc<dyn LoadQueuePort>,
    ) -> Self {
        Self {
            session_manager,
            library,
            load_queue,
        }
    }

    pub async fn handle(
        &self,
        cmd: SelectDocumentCommand,
    ) -> Result<SelectDocumentResponse, ApplicationError> {
        if !self.session_manager.is_valid(&cmd.session_id) {
            return Err(ApplicationError::not_found("Session", cmd.session_id));
        }

        let document_id = DocumentId::new(cmd.document_id)?;
        let document = self
            .library
            .find(&document_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Document", document_id.to_string()))?;

        let load_id = self
            .session_manager
            .begin_load(&cmd.session_id, document_id.clone())?;

        let request = LoadRequest {
            session_id: cmd.session_id.clone(),
            load_id,
            document,
        };
        if let Err(e) = self.load_queue.submit(request) {
            // 未能入队，撤销加载状态
            if let Err(undo) = self
                .session_manager
                .fail_load(&cmd.session_id, load_id, e.to_string())
            {
                tracing::warn!(session_id = %cmd.session_id, error = %undo, "Failed to reset load state");
            }
            return Err(e.into());
        }

        tracing::info!(
            session_id = %cmd.session_id,
            document_id = %document_id,
            load_id = %load_id,
            "Document selected"
        );

        Ok(SelectDocumentResponse {
            session_id: cmd.session_id,
            document_id: document_id.to_string(),
            load_id,
        })
    }
}

/// Scroll Handler
pub struct ScrollHandler {
    session_manager: Arc<dyn SessionManagerPort>,
}

impl ScrollHandler {
    pub fn new(session_manager: Arc<dyn SessionManagerPort>) -> Self {
        Self { session_manager }
    }

    pub async fn handle(&self, cmd: ScrollCommand) -> Result<ScrollResponse, ApplicationError> {
        let scroll_position = self.session_manager.scroll_to(&cmd.session_id, cmd.index)?;
        Ok(ScrollResponse {
            session_id: cmd.session_id,
            scroll_position,
        })
    }
}

/// JumpRandom Handler - 长按随机跳转
pub struct JumpRandomHandler {
    session_manager: Arc<dyn SessionManagerPort>,
}

impl JumpRandomHandler {
    pub fn new(session_manager: Arc<dyn SessionManagerPort>) -> Self {
        Self { session_manager }
    }

    pub async fn handle(
        &self,
        cmd: JumpRandomCommand,
    ) -> Result<JumpRandomResponse, ApplicationError> {
        let selection = self
            .session_manager
            .jump_to_random(&cmd.session_id)?
            .ok_or_else(|| ApplicationError::invalid_state("Nothing to jump to"))?;

        Ok(JumpRandomResponse {
            session_id: cmd.session_id,
            selection,
            message: jump_message(selection),
        })
    }
}

/// Back Handler - 返回文档选择
pub struct BackHandler {
    session_manager: Arc<dyn SessionManagerPort>,
}

impl BackHandler {
    pub fn new(session_manager: Arc<dyn SessionManagerPort>) -> Self {
        Self { session_manager }
    }

    pub async fn handle(&self, cmd: BackCommand) -> Result<(), ApplicationError> {
        self.session_manager.back(&cmd.session_id)?;
        Ok(())
    }
}

/// CloseReader Handler
pub struct CloseReaderHandler {
    session_manager: Arc<dyn SessionManagerPort>,
}

impl CloseReaderHandler {
    pub fn new(session_manager: Arc<dyn SessionManagerPort>) -> Self {
        Self { session_manager }
    }

    pub async fn handle(
        &self,
        cmd: CloseReaderCommand,
    ) -> Result<CloseReaderResponse, ApplicationError> {
        self.session_manager.close(&cmd.session_id)?;
        Ok(CloseReaderResponse {
            session_id: cmd.session_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reader::ViewState;
    use crate::infrastructure::adapters::FileDocumentLibrary;
    use crate::infrastructure::memory::{ChannelLoadQueue, InMemorySessionManager};
    use tempfile::tempdir;

    fn select(session_id: &str, document_id: &str) -> SelectDocumentCommand {
        SelectDocumentCommand {
            session_id: session_id.to_string(),
            document_id: document_id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_select_rejected_while_loading() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("poems.txt"), "a\n\n").unwrap();

        let manager = Arc::new(InMemorySessionManager::new());
        let (queue, _rx) = ChannelLoadQueue::channel(8);
        let handler = SelectDocumentHandler::new(
            manager.clone(),
            Arc::new(FileDocumentLibrary::new(dir.path())),
            queue.arc(),
        );

        let session_id = manager.create();
        handler.handle(select(&session_id, "poems")).await.unwrap();

        let result = handler.handle(select(&session_id, "poems")).await;
        assert!(matches!(result, Err(ApplicationError::Conflict(_))));

        let result = handler.handle(select(&session_id, "missing")).await;
        assert!(matches!(result, Err(ApplicationError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_select_resets_state_when_queue_full() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("poems.txt"), "a\n\n").unwrap();

        let manager = Arc::new(InMemorySessionManager::new());
        let (queue, _rx) = ChannelLoadQueue::channel(1);
        let handler = SelectDocumentHandler::new(
            manager.clone(),
            Arc::new(FileDocumentLibrary::new(dir.path())),
            queue.arc(),
        );

        let first = manager.create();
        handler.handle(select(&first, "poems")).await.unwrap();

        let second = manager.create();
        let result = handler.handle(select(&second, "poems")).await;
        assert!(matches!(result, Err(ApplicationError::InternalError(_))));

        let summary = manager.summary(&second).unwrap();
        assert_eq!(summary.state, ViewState::Selecting);
        assert!(summary.last_error.is_some());
    }

    #[tokio::test]
    async fn test_jump_on_empty_session() {
        let manager = Arc::new(InMemorySessionManager::new());
        let session_id = manager.create();

        let handler = JumpRandomHandler::new(manager);
        let result = handler
            .handle(JumpRandomCommand { session_id })
            .await;
        assert!(matches!(result, Err(ApplicationError::InvalidState(_))));
    }
}
