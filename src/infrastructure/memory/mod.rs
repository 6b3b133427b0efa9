//! Memory Layer - In-Memory State Management
//!
//! 实现 SessionManager 与 LoadQueue，管理阅读会话和加载请求的内存状态

mod load_queue;
mod session_manager;

pub use load_queue::ChannelLoadQueue;
pub use session_manager::InMemorySessionManager;
