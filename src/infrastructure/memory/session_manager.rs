//! In-Memory Session Manager Implementation

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::ports::{
    ItemsPage, ReaderSession, SessionError, SessionManagerPort, SessionSummary,
};
use crate::domain::document::DocumentId;
use crate::domain::paragraph::ParagraphSequence;

/// 内存会话管理器
pub struct InMemorySessionManager {
    sessions: DashMap<String, ReaderSession>,
}

impl InMemorySessionManager {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 在会话上执行修改并更新活动时间
    fn with_session<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut ReaderSession) -> Result<T, SessionError>,
    ) -> Result<T, SessionError> {
        let mut session = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;
        session.last_activity = Utc::now();
        f(session.value_mut())
    }
}

/// 空闲超时转换为时长，超出可表示范围视为永不过期
fn idle_timeout(idle_timeout_secs: u64) -> Option<chrono::Duration> {
    i64::try_from(idle_timeout_secs)
        .ok()
        .and_then(chrono::Duration::try_seconds)
}

fn is_idle(session: &ReaderSession, now: DateTime<Utc>, timeout: chrono::Duration) -> bool {
    now - session.last_activity > timeout
}

impl Default for InMemorySessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionManagerPort for InMemorySessionManager {
    fn create(&self) -> String {
        let session = ReaderSession::new();
        let session_id = session.id.clone();
        self.sessions.insert(session_id.clone(), session);
        tracing::info!(session_id = %session_id, "Reader session created");
        session_id
    }

    fn summary(&self, id: &str) -> Result<SessionSummary, SessionError> {
        self.with_session(id, |session| Ok(session.summary()))
    }

    fn begin_load(&self, id: &str, document_id: DocumentId) -> Result<Uuid, SessionError> {
        self.with_session(id, |session| {
            let load_id = session.state.begin_load(document_id)?;
            session.last_error = None;
            tracing::debug!(session_id = %id, load_id = %load_id, "Session loading");
            Ok(load_id)
        })
    }

    fn complete_load(
        &self,
        id: &str,
        load_id: Uuid,
        paragraphs: ParagraphSequence,
    ) -> Result<(), SessionError> {
        self.with_session(id, |session| {
            let document_id = session.state.finish_load(load_id)?;
            session.presenter.set_data(paragraphs);
            tracing::info!(
                session_id = %id,
                document_id = %document_id,
                count = session.presenter.count(),
                "Session displaying"
            );
            Ok(())
        })
    }

    fn fail_load(&self, id: &str, load_id: Uuid, error: String) -> Result<(), SessionError> {
        self.with_session(id, |session| {
            let document_id = session.state.fail_load(load_id)?;
            session.presenter.clear();
            tracing::warn!(
                session_id = %id,
                document_id = %document_id,
                error = %error,
                "Session load failed"
            );
            session.last_error = Some(error);
            Ok(())
        })
    }

    fn items(&self, id: &str, start: usize, limit: usize) -> Result<ItemsPage, SessionError> {
        self.with_session(id, |session| {
            Ok(ItemsPage {
                start,
                total: session.presenter.count(),
                items: session.presenter.items(start, limit).to_vec(),
            })
        })
    }

    fn scroll_to(&self, id: &str, index: usize) -> Result<usize, SessionError> {
        self.with_session(id, |session| Ok(session.presenter.scroll_to(index)?))
    }

    fn jump_to_random(&self, id: &str) -> Result<Option<usize>, SessionError> {
        self.with_session(id, |session| {
            let mut rng = rand::thread_rng();
            Ok(session.presenter.jump_to_random(&mut rng))
        })
    }

    fn back(&self, id: &str) -> Result<(), SessionError> {
        self.with_session(id, |session| {
            session.state.back();
            session.presenter.clear();
            tracing::debug!(session_id = %id, "Session back to selecting");
            Ok(())
        })
    }

    fn is_valid(&self, id: &str) -> bool {
        self.sessions.contains_key(id)
    }

    fn close(&self, id: &str) -> Result<(), SessionError> {
        self.sessions
            .remove(id)
            .map(|_| {
                tracing::info!(session_id = %id, "Reader session closed");
            })
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    fn get_expired_sessions(&self, idle_timeout_secs: u64) -> Vec<String> {
        let Some(timeout) = idle_timeout(idle_timeout_secs) else {
            return Vec::new();
        };
        let now = Utc::now();

        self.sessions
            .iter()
            .filter(|entry| is_idle(entry.value(), now, timeout))
            .map(|entry| entry.key().clone())
            .collect()
    }

    fn close_if_idle(&self, id: &str, idle_timeout_secs: u64) -> bool {
        let Some(timeout) = idle_timeout(idle_timeout_secs) else {
            return false;
        };
        let now = Utc::now();

        let closed = self
            .sessions
            .remove_if(id, |_, session| is_idle(session, now, timeout))
            .is_some();
        if closed {
            tracing::debug!(session_id = %id, "Idle reader session closed");
        }
        closed
    }
}
