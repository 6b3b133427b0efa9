//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "TREEVIEWER";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `TREEVIEWER_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `TREEVIEWER_SERVER__PORT=8080`
/// - `TREEVIEWER_LIBRARY__DIR=/srv/texts`
/// - `TREEVIEWER_READER__FLUSH_TRAILING_PARAGRAPH=true`
/// - `TREEVIEWER_ASSETS__PACKAGES=assets/html,assets/extra`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5070)?
        .set_default("library.dir", "data/library")?
        .set_default("reader.flush_trailing_paragraph", false)?
        .set_default("reader.load_queue_size", 64)?
        .set_default("reader.page_limit", 500)?
        .set_default("assets.mime_type", "text/html")?
        .set_default("session.reap_interval_secs", 300)?
        .set_default("session.idle_timeout_secs", 3600)?
        .set_default("log.level", "info")?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级），assets.packages 以逗号分隔
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("assets.packages")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 空闲超时上限（秒），超出后无法换算为毫秒时长
const MAX_IDLE_TIMEOUT_SECS: u64 = i64::MAX as u64 / 1000;

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.library.dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Library directory cannot be empty".to_string(),
        ));
    }

    if config.reader.load_queue_size == 0 {
        return Err(ConfigError::ValidationError(
            "Load queue size cannot be 0".to_string(),
        ));
    }

    if config.reader.page_limit == 0 {
        return Err(ConfigError::ValidationError(
            "Page limit cannot be 0".to_string(),
        ));
    }

    if config.session.reap_interval_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Session reap interval cannot be 0".to_string(),
        ));
    }

    if config.session.idle_timeout_secs > MAX_IDLE_TIMEOUT_SECS {
        return Err(ConfigError::ValidationError(format!(
            "Session idle timeout cannot exceed {} seconds",
            MAX_IDLE_TIMEOUT_SECS
        )));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Library Directory: {:?}", config.library.dir);
    tracing::info!(
        "Flush Trailing Paragraph: {}",
        config.reader.flush_trailing_paragraph
    );
    tracing::info!("Load Queue Size: {}", config.reader.load_queue_size);
    tracing::info!("Page Limit: {}", config.reader.page_limit);
    tracing::info!("Asset Packages: {:?}", config.assets.packages);
    tracing::info!("Asset MIME Type: {}", config.assets.mime_type);
    tracing::info!(
        "Session Idle Timeout: {}s (checked every {}s)",
        config.session.idle_timeout_secs,
        config.session.reap_interval_secs
    );
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
