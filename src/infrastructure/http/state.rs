//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    BackHandler, CloseReaderHandler, JumpRandomHandler, OpenReaderHandler, ScrollHandler,
    SelectDocumentHandler,
    // Query handlers
    GetReaderItemsHandler, GetReaderStateHandler, ListDocumentsHandler, LoadParagraphsHandler,
    OpenAssetHandler, QueryAssetMetadataHandler,
    // Ports
    AssetStorePort, DocumentLibraryPort, LoadQueuePort, SessionManagerPort,
};
use crate::domain::paragraph::LoadOptions;

/// 阅读相关设置
#[derive(Debug, Clone)]
pub struct ReaderSettings {
    pub load_options: LoadOptions,
    /// 单页最大段落数
    pub page_limit: usize,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            load_options: LoadOptions::default(),
            page_limit: 500,
        }
    }
}

/// 应用状态
///
/// SessionManager 为内存实现，文档加载经由 LoadQueue 交给后台 Worker
pub struct AppState {
    // ========== Ports ==========
    pub session_manager: Arc<dyn SessionManagerPort>,
    pub library: Arc<dyn DocumentLibraryPort>,
    pub asset_store: Arc<dyn AssetStorePort>,
    pub load_queue: Arc<dyn LoadQueuePort>,

    // ========== Command Handlers ==========
    pub open_reader_handler: OpenReaderHandler,
    pub select_document_handler: SelectDocumentHandler,
    pub scroll_handler: ScrollHandler,
    pub jump_random_handler: JumpRandomHandler,
    pub back_handler: BackHandler,
    pub close_reader_handler: CloseReaderHandler,

    // ========== Query Handlers ==========
    pub list_documents_handler: ListDocumentsHandler,
    pub load_paragraphs_handler: LoadParagraphsHandler,
    pub get_reader_state_handler: GetReaderStateHandler,
    pub get_reader_items_handler: GetReaderItemsHandler,
    pub query_asset_handler: QueryAssetMetadataHandler,
    pub open_asset_handler: OpenAssetHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        session_manager: Arc<dyn SessionManagerPort>,
        library: Arc<dyn DocumentLibraryPort>,
        asset_store: Arc<dyn AssetStorePort>,
        load_queue: Arc<dyn LoadQueuePort>,
        settings: ReaderSettings,
    ) -> Self {
        Self {
            // Ports
            session_manager: session_manager.clone(),
            library: library.clone(),
            asset_store: asset_store.clone(),
            load_queue: load_queue.clone(),

            // Command handlers
            open_reader_handler: OpenReaderHandler::new(session_manager.clone()),
            select_document_handler: SelectDocumentHandler::new(
                session_manager.clone(),
                library.clone(),
                load_queue.clone(),
            ),
            scroll_handler: ScrollHandler::new(session_manager.clone()),
            jump_random_handler: JumpRandomHandler::new(session_manager.clone()),
            back_handler: BackHandler::new(session_manager.clone()),
            close_reader_handler: CloseReaderHandler::new(session_manager.clone()),

            // Query handlers
            list_documents_handler: ListDocumentsHandler::new(library.clone()),
            load_paragraphs_handler: LoadParagraphsHandler::new(
                library.clone(),
                settings.load_options,
                settings.page_limit,
            ),
            get_reader_state_handler: GetReaderStateHandler::new(session_manager.clone()),
            get_reader_items_handler: GetReaderItemsHandler::new(
                session_manager.clone(),
                settings.page_limit,
            ),
            query_asset_handler: QueryAssetMetadataHandler::new(),
            open_asset_handler: OpenAssetHandler::new(asset_store.clone()),
        }
    }
}
