//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 文档库配置
    #[serde(default)]
    pub library: LibraryConfig,

    /// 阅读配置
    #[serde(default)]
    pub reader: ReaderConfig,

    /// 资源包配置
    #[serde(default)]
    pub assets: AssetsConfig,

    /// 会话配置
    #[serde(default)]
    pub session: SessionConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5070
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 文档库配置
#[derive(Debug, Clone, Deserialize)]
pub struct LibraryConfig {
    /// 文档目录（`.txt` 文件及可选的 `library.toml`）
    #[serde(default = "default_library_dir")]
    pub dir: PathBuf,
}

fn default_library_dir() -> PathBuf {
    PathBuf::from("data/library")
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            dir: default_library_dir(),
        }
    }
}

/// 阅读配置
#[derive(Debug, Clone, Deserialize)]
pub struct ReaderConfig {
    /// 文档末尾未闭合的段落是否输出
    #[serde(default)]
    pub flush_trailing_paragraph: bool,

    /// 加载队列容量
    #[serde(default = "default_load_queue_size")]
    pub load_queue_size: usize,

    /// 单页最大段落数
    #[serde(default = "default_page_limit")]
    pub page_limit: usize,
}

fn default_load_queue_size() -> usize {
    64
}

fn default_page_limit() -> usize {
    500
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            flush_trailing_paragraph: false,
            load_queue_size: default_load_queue_size(),
            page_limit: default_page_limit(),
        }
    }
}

/// 资源包配置
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// 资源包目录，下标即 cookie
    #[serde(default)]
    pub packages: Vec<PathBuf>,

    /// 所有资源统一报告的 MIME 类型
    #[serde(default = "default_mime_type")]
    pub mime_type: String,
}

fn default_mime_type() -> String {
    "text/html".to_string()
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            packages: Vec::new(),
            mime_type: default_mime_type(),
        }
    }
}

/// 会话配置
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// 空闲会话检查间隔（秒）
    #[serde(default = "default_reap_interval")]
    pub reap_interval_secs: u64,

    /// 会话空闲超时（秒）
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
}

fn default_reap_interval() -> u64 {
    300 // 5 分钟
}

fn default_idle_timeout() -> u64 {
    3600 // 1 小时
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reap_interval_secs: default_reap_interval(),
            idle_timeout_secs: default_idle_timeout(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5070);
        assert_eq!(config.library.dir, PathBuf::from("data/library"));
        assert!(!config.reader.flush_trailing_paragraph);
        assert_eq!(config.reader.load_queue_size, 64);
        assert!(config.assets.packages.is_empty());
        assert_eq!(config.assets.mime_type, "text/html");
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:5070");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
[reader]
flush_trailing_paragraph = true

[assets]
packages = ["assets/html", "assets/extra"]
"#,
        )
        .unwrap();

        assert!(config.reader.flush_trailing_paragraph);
        assert_eq!(config.reader.page_limit, 500);
        assert_eq!(config.assets.packages.len(), 2);
        assert_eq!(config.assets.mime_type, "text/html");
        assert_eq!(config.session.idle_timeout_secs, 3600);
    }
}
