//! Channel Load Queue Implementation

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::ports::{LoadQueueError, LoadQueuePort, LoadRequest};

/// 基于 mpsc 的加载队列
pub struct ChannelLoadQueue {
    sender: mpsc::Sender<LoadRequest>,
}

impl ChannelLoadQueue {
    pub fn new(sender: mpsc::Sender<LoadRequest>) -> Self {
        Self { sender }
    }

    /// 创建队列及其接收端
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<LoadRequest>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self::new(tx), rx)
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl LoadQueuePort for ChannelLoadQueue {
    fn submit(&self, request: LoadRequest) -> Result<(), LoadQueueError> {
        let session_id = request.session_id.clone();
        self.sender.try_send(request).map_err(|e| {
            tracing::warn!(session_id = %session_id, error = %e, "Failed to enqueue load");
            match e {
                mpsc::error::TrySendError::Full(_) => LoadQueueError::Full,
                mpsc::error::TrySendError::Closed(_) => LoadQueueError::Closed,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::{DocumentId, DocumentPath, SourceDocument, Title};
    use uuid::Uuid;

    fn request() -> LoadRequest {
        LoadRequest {
            session_id: "session-1".to_string(),
            load_id: Uuid::new_v4(),
            document: SourceDocument::new(
                DocumentId::new("poems").unwrap(),
                Title::new("Poems").unwrap(),
                DocumentPath::from("/tmp/poems.txt"),
            ),
        }
    }

    #[tokio::test]
    async fn test_submit_and_receive() {
        let (queue, mut rx) = ChannelLoadQueue::channel(4);
        let req = request();
        let load_id = req.load_id;
        queue.submit(req).unwrap();

        let received = rx.recv().await.unwrap();
        assert_eq!(received.load_id, load_id);
    }

    #[tokio::test]
    async fn test_full_and_closed() {
        let (queue, rx) = ChannelLoadQueue::channel(1);
        queue.submit(request()).unwrap();
        assert!(matches!(queue.submit(request()), Err(LoadQueueError::Full)));

        drop(rx);
        assert!(matches!(queue.submit(request()), Err(LoadQueueError::Closed)));
    }
}
