//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod asset_store;
mod document_library;
mod load_queue;
mod session_manager;

pub use asset_store::AssetStorePort;
pub use document_library::DocumentLibraryPort;
pub use load_queue::{LoadQueueError, LoadQueuePort, LoadRequest};
pub use session_manager::{
    ItemsPage, ReaderSession, SessionError, SessionManagerPort, SessionSummary,
};
