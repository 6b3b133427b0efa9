//! Load Worker - Background Paragraph Loader
//!
//! 从队列消费加载请求，在阻塞线程池中切分段落，完成后交付给会话管理器

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::loading::load_document;
use crate::application::ports::{DocumentLibraryPort, LoadRequest, SessionManagerPort};
use crate::domain::paragraph::LoadOptions;

/// Worker 配置
#[derive(Debug, Clone, Default)]
pub struct LoadWorkerConfig {
    pub load_options: LoadOptions,
}

/// 加载 Worker
///
/// 每个请求独立运行，互不共享缓冲区；不支持取消
pub struct LoadWorker {
    config: LoadWorkerConfig,
    queue_receiver: mpsc::Receiver<LoadRequest>,
    library: Arc<dyn DocumentLibraryPort>,
    session_manager: Arc<dyn SessionManagerPort>,
}

impl LoadWorker {
    pub fn new(
        config: LoadWorkerConfig,
        queue_receiver: mpsc::Receiver<LoadRequest>,
        library: Arc<dyn DocumentLibraryPort>,
        session_manager: Arc<dyn SessionManagerPort>,
    ) -> Self {
        Self {
            config,
            queue_receiver,
            library,
            session_manager,
        }
    }

    /// 启动 Worker，队列关闭后退出
    pub async fn run(mut self) {
        tracing::info!(
            flush_trailing = self.config.load_options.flush_trailing,
            "LoadWorker started"
        );

        while let Some(request) = self.queue_receiver.recv().await {
            let library = self.library.clone();
            let session_manager = self.session_manager.clone();
            let options = self.config.load_options.clone();

            tokio::spawn(async move {
                process_request(request, library, session_manager, options).await;
            });
        }

        tracing::info!("LoadWorker stopped");
    }
}

async fn process_request(
    request: LoadRequest,
    library: Arc<dyn DocumentLibraryPort>,
    session_manager: Arc<dyn SessionManagerPort>,
    options: LoadOptions,
) {
    let LoadRequest {
        session_id,
        load_id,
        document,
    } = request;
    let document_id = document.id().clone();

    tracing::debug!(
        session_id = %session_id,
        document_id = %document_id,
        load_id = %load_id,
        "Processing load request"
    );

    let delivered = match load_document(library, document, options).await {
        Ok(paragraphs) => session_manager.complete_load(&session_id, load_id, paragraphs),
        Err(e) => session_manager.fail_load(&session_id, load_id, e.to_string()),
    };

    // 会话已关闭或已切换，丢弃结果
    if let Err(e) = delivered {
        tracing::debug!(
            session_id = %session_id,
            load_id = %load_id,
            error = %e,
            "Load result discarded"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{LoadQueuePort, SessionError};
    use crate::domain::document::DocumentId;
    use crate::domain::reader::ViewState;
    use crate::infrastructure::adapters::FileDocumentLibrary;
    use crate::infrastructure::memory::{ChannelLoadQueue, InMemorySessionManager};
    use std::time::Duration;
    use tempfile::tempdir;

    async fn wait_until_settled(
        manager: &InMemorySessionManager,
        session_id: &str,
    ) -> Result<ViewState, SessionError> {
        for _ in 0..200 {
            let summary = manager.summary(session_id)?;
            if !summary.state.is_loading() {
                return Ok(summary.state);
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("load did not settle");
    }

    #[tokio::test]
    async fn test_worker_delivers_paragraphs() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("poems.txt"), "one\ntwo\n\nthree\n\n").unwrap();

        let library = Arc::new(FileDocumentLibrary::new(dir.path()));
        let manager = Arc::new(InMemorySessionManager::new());
        let (queue, rx) = ChannelLoadQueue::channel(8);

        let worker = LoadWorker::new(LoadWorkerConfig::default(), rx, library.clone(), manager.clone());
        tokio::spawn(worker.run());

        let session_id = manager.create();
        let document_id = DocumentId::new("poems").unwrap();
        let document = library.find(&document_id).await.unwrap().unwrap();
        let load_id = manager.begin_load(&session_id, document_id.clone()).unwrap();
        queue
            .submit(LoadRequest {
                session_id: session_id.clone(),
                load_id,
                document,
            })
            .unwrap();

        let state = wait_until_settled(&manager, &session_id).await.unwrap();
        assert_eq!(state, ViewState::Displaying { document_id });

        let page = manager.items(&session_id, 0, 10).unwrap();
        assert_eq!(page.items, vec!["one two \n", "three \n"]);
    }

    #[tokio::test]
    async fn test_worker_reports_missing_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("gone.txt"), "x\n\n").unwrap();

        let library = Arc::new(FileDocumentLibrary::new(dir.path()));
        let manager = Arc::new(InMemorySessionManager::new());
        let (queue, rx) = ChannelLoadQueue::channel(8);
        tokio::spawn(
            LoadWorker::new(LoadWorkerConfig::default(), rx, library.clone(), manager.clone()).run(),
        );

        let session_id = manager.create();
        let document_id = DocumentId::new("gone").unwrap();
        let document = library.find(&document_id).await.unwrap().unwrap();
        std::fs::remove_file(dir.path().join("gone.txt")).unwrap();

        let load_id = manager.begin_load(&session_id, document_id).unwrap();
        queue
            .submit(LoadRequest {
                session_id: session_id.clone(),
                load_id,
                document,
            })
            .unwrap();

        let state = wait_until_settled(&manager, &session_id).await.unwrap();
        assert_eq!(state, ViewState::Selecting);
        assert!(manager.summary(&session_id).unwrap().last_error.is_some());
    }
}
