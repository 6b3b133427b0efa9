//! Treeviewer - 纯文本文档阅读服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Paragraph: 段落切分
//! - Document: 源文档
//! - Reader: 视图状态机与列表展示
//! - Asset: 资源标识与元数据
//!
//! 应用层 (application/):
//! - Ports: 端口定义（DocumentLibrary, AssetStore, SessionManager, LoadQueue）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + 资源流
//! - Memory: SessionManager, LoadQueue 内存实现
//! - Worker: LoadWorker 后台加载, SessionReaper 空闲清理
//! - Adapters: 文件文档库, 资源包存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
