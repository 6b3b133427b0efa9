//! Asset Queries

use std::io::Read;

use crate::domain::asset::AssetId;

/// 资源元数据查询
#[derive(Debug, Clone)]
pub struct QueryAssetMetadata {
    pub path: String,
    pub projection: Option<Vec<String>>,
}

/// 打开资源查询
#[derive(Debug, Clone)]
pub struct OpenAsset {
    pub path: String,
}

/// 已打开的资源
pub struct OpenedAsset {
    pub id: AssetId,
    pub mime_type: String,
    pub reader: Box<dyn Read + Send>,
}

impl std::fmt::Debug for OpenedAsset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenedAsset")
            .field("id", &self.id)
            .field("mime_type", &self.mime_type)
            .finish_non_exhaustive()
    }
}
