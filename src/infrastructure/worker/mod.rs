//! Worker Layer - 后台任务
//!
//! - LoadWorker: 段落加载
//! - SessionReaper: 空闲会话清理

mod load_worker;
mod session_reaper;

pub use load_worker::{LoadWorker, LoadWorkerConfig};
pub use session_reaper::{SessionReaper, SessionReaperConfig};
