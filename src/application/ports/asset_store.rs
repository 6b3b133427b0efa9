//! Asset Store Port - 资源包抽象
//!
//! 按 cookie 选择资源包并打开包内文件

use std::io::Read;

use crate::domain::asset::{AssetError, AssetId};

/// Asset Store Port
///
/// 打开操作为阻塞调用，须在阻塞线程中使用
pub trait AssetStorePort: Send + Sync {
    /// 打开资源，标识无法定位到文件时返回 NotFound
    fn open(&self, id: &AssetId) -> Result<Box<dyn Read + Send>, AssetError>;

    /// 资源的 MIME 类型
    fn mime_type(&self, id: &AssetId) -> String;
}
