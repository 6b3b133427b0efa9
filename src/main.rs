//! Treeviewer - 纯文本文档阅读服务
//!
//! - Domain: paragraph/, document/, reader/, asset/
//! - Application: commands, queries, ports
//! - Infrastructure: http, memory, worker, adapters

use std::sync::Arc;

use treeviewer::config::{load_config, print_config};
use treeviewer::domain::paragraph::LoadOptions;
use treeviewer::infrastructure::adapters::{FileAssetStore, FileDocumentLibrary};
use treeviewer::infrastructure::http::{AppState, HttpServer, ReaderSettings, ServerConfig};
use treeviewer::infrastructure::memory::{ChannelLoadQueue, InMemorySessionManager};
use treeviewer::infrastructure::worker::{
    LoadWorker, LoadWorkerConfig, SessionReaper, SessionReaperConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},treeviewer={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Treeviewer - 文档阅读服务");
    print_config(&config);

    if !config.library.dir.is_dir() {
        tracing::warn!(dir = ?config.library.dir, "Library directory does not exist");
    }

    let load_options = LoadOptions {
        flush_trailing: config.reader.flush_trailing_paragraph,
    };

    // 适配器
    let library = Arc::new(FileDocumentLibrary::new(&config.library.dir));
    let asset_store = Arc::new(FileAssetStore::new(
        config.assets.packages.clone(),
        config.assets.mime_type.clone(),
    ));
    let session_manager = Arc::new(InMemorySessionManager::new());

    // 加载队列与 Worker
    let (load_queue, load_rx) = ChannelLoadQueue::channel(config.reader.load_queue_size);
    let worker = LoadWorker::new(
        LoadWorkerConfig {
            load_options: load_options.clone(),
        },
        load_rx,
        library.clone(),
        session_manager.clone(),
    );
    tokio::spawn(worker.run());

    // 空闲会话清理
    let reaper = SessionReaper::new(
        SessionReaperConfig {
            interval_secs: config.session.reap_interval_secs,
            idle_timeout_secs: config.session.idle_timeout_secs,
        },
        session_manager.clone(),
    );
    tokio::spawn(reaper.run());

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(
        session_manager,
        library,
        asset_store,
        load_queue.arc(),
        ReaderSettings {
            load_options,
            page_limit: config.reader.page_limit,
        },
    );

    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
