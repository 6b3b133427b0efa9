//! Session Reaper - 定期关闭空闲会话

use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::SessionManagerPort;

/// Reaper 配置
#[derive(Debug, Clone)]
pub struct SessionReaperConfig {
    /// 检查间隔（秒）
    pub interval_secs: u64,
    /// 空闲超时（秒）
    pub idle_timeout_secs: u64,
}

impl Default for SessionReaperConfig {
    fn default() -> Self {
        Self {
            interval_secs: 300,
            idle_timeout_secs: 3600,
        }
    }
}

pub struct SessionReaper {
    config: SessionReaperConfig,
    session_manager: Arc<dyn SessionManagerPort>,
}

impl SessionReaper {
    pub fn new(config: SessionReaperConfig, session_manager: Arc<dyn SessionManagerPort>) -> Self {
        Self {
            config,
            session_manager,
        }
    }

    /// 关闭一次所有过期会话，返回关闭数量
    pub fn sweep(&self) -> usize {
        let expired = self
            .session_manager
            .get_expired_sessions(self.config.idle_timeout_secs);

        let closed = expired
            .iter()
            .filter(|id| {
                self.session_manager
                    .close_if_idle(id, self.config.idle_timeout_secs)
            })
            .count();

        if closed > 0 {
            tracing::info!(closed, "Idle reader sessions closed");
        }
        closed
    }

    pub async fn run(self) {
        tracing::info!(
            interval_secs = self.config.interval_secs,
            idle_timeout_secs = self.config.idle_timeout_secs,
            "SessionReaper started"
        );

        let mut ticker = tokio::time::interval(Duration::from_secs(self.config.interval_secs));
        ticker.tick().await;
        loop {
            ticker.tick().await;
            self.sweep();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemorySessionManager;

    #[test]
    fn test_sweep_keeps_active_sessions() {
        let manager = Arc::new(InMemorySessionManager::new());
        let session_id = manager.create();

        let reaper = SessionReaper::new(SessionReaperConfig::default(), manager.clone());
        assert_eq!(reaper.sweep(), 0);
        assert!(manager.is_valid(&session_id));
    }

    #[tokio::test]
    async fn test_sweep_closes_idle_sessions() {
        let manager = Arc::new(InMemorySessionManager::new());
        let session_id = manager.create();
        tokio::time::sleep(Duration::from_millis(20)).await;

        let config = SessionReaperConfig {
            interval_secs: 1,
            idle_timeout_secs: 0,
        };
        let reaper = SessionReaper::new(config, manager.clone());
        assert_eq!(reaper.sweep(), 1);
        assert!(!manager.is_valid(&session_id));
    }

    #[tokio::test]
    async fn test_sweep_spares_sessions_being_read() {
        let manager = Arc::new(InMemorySessionManager::new());
        let session_id = manager.create();
        tokio::time::sleep(Duration::from_millis(1100)).await;

        manager.items(&session_id, 0, 10).unwrap();
        manager.summary(&session_id).unwrap();

        let config = SessionReaperConfig {
            interval_secs: 1,
            idle_timeout_secs: 1,
        };
        let reaper = SessionReaper::new(config, manager.clone());
        assert_eq!(reaper.sweep(), 0);
        assert!(manager.is_valid(&session_id));
    }

    #[tokio::test]
    async fn test_sweep_with_unbounded_timeout() {
        let manager = Arc::new(InMemorySessionManager::new());
        let session_id = manager.create();
        tokio::time::sleep(Duration::from_millis(20)).await;

        let config = SessionReaperConfig {
            interval_secs: 1,
            idle_timeout_secs: u64::MAX,
        };
        let reaper = SessionReaper::new(config, manager.clone());
        assert_eq!(reaper.sweep(), 0);
        assert!(manager.is_valid(&session_id));
    }
}
