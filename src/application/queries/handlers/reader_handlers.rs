//! Reader Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{ItemsPage, SessionManagerPort, SessionSummary};
use crate::application::queries::{GetReaderItems, GetReaderState};

/// GetReaderState Handler
pub struct GetReaderStateHandler {
    session_manager: Arc<dyn SessionManagerPort>,
}

impl GetReaderStateHandler {
    pub fn new(session_manager: Arc<dyn SessionManagerPort>) -> Self {
        Self { session_manager }
    }

    pub async fn handle(&self, query: GetReaderState) -> Result<SessionSummary, ApplicationError> {
        Ok(self.session_manager.summary(&query.session_id)?)
    }
}

/// GetReaderItems Handler
pub struct GetReaderItemsHandler {
    session_manager: Arc<dyn SessionManagerPort>,
    page_limit: usize,
}

impl GetReaderItemsHandler {
    pub fn new(session_manager: Arc<dyn SessionManagerPort>, page_limit: usize) -> Self {
        Self {
            session_manager,
            page_limit,
        }
    }

    pub async fn handle(&self, query: GetReaderItems) -> Result<ItemsPage, ApplicationError> {
        let start = query.start_index.unwrap_or(0);
        let limit = query.limit.unwrap_or(self.page_limit).min(self.page_limit);
        Ok(self.session_manager.items(&query.session_id, start, limit)?)
    }
}
