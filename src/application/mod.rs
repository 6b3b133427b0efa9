//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（DocumentLibrary、AssetStore、SessionManager、LoadQueue）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - loading: 后台段落加载
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod loading;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    BackCommand,
    CloseReaderCommand,
    CloseReaderResponse,
    JumpRandomCommand,
    JumpRandomResponse,
    OpenReaderCommand,
    OpenReaderResponse,
    ScrollCommand,
    ScrollResponse,
    SelectDocumentCommand,
    SelectDocumentResponse,
    // Handlers
    handlers::{
        BackHandler, CloseReaderHandler, JumpRandomHandler, OpenReaderHandler, ScrollHandler,
        SelectDocumentHandler,
    },
};

pub use error::ApplicationError;

pub use loading::load_document;

pub use ports::{
    // Asset store
    AssetStorePort,
    // Document library
    DocumentLibraryPort,
    // Load queue
    LoadQueueError,
    LoadQueuePort,
    LoadRequest,
    // Session manager
    ItemsPage,
    ReaderSession,
    SessionError,
    SessionManagerPort,
    SessionSummary,
};

pub use queries::{
    GetReaderItems,
    GetReaderState,
    ListDocuments,
    LoadParagraphs,
    OpenAsset,
    OpenedAsset,
    QueryAssetMetadata,
    // Handlers
    handlers::{
        DocumentResponse, GetReaderItemsHandler, GetReaderStateHandler, ListDocumentsHandler,
        LoadParagraphsHandler, OpenAssetHandler, ParagraphsPage, QueryAssetMetadataHandler,
    },
};
