//! Asset Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::AssetStorePort;
use crate::application::queries::{OpenAsset, OpenedAsset, QueryAssetMetadata};
use crate::domain::asset::{AssetId, AssetMetadata};

/// QueryAssetMetadata Handler
///
/// 只解析标识，不访问资源包
pub struct QueryAssetMetadataHandler;

impl QueryAssetMetadataHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(&self, query: QueryAssetMetadata) -> Result<AssetMetadata, ApplicationError> {
        let id = AssetId::parse(&query.path)?;
        Ok(AssetMetadata::query(&id, query.projection.as_deref()))
    }
}

impl Default for QueryAssetMetadataHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// OpenAsset Handler
pub struct OpenAssetHandler {
    store: Arc<dyn AssetStorePort>,
}

impl OpenAssetHandler {
    pub fn new(store: Arc<dyn AssetStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: OpenAsset) -> Result<OpenedAsset, ApplicationError> {
        let id = AssetId::parse(&query.path)?;
        let store = self.store.clone();

        let opened = tokio::task::spawn_blocking(move || {
            let reader = store.open(&id)?;
            let mime_type = store.mime_type(&id);
            Ok::<_, ApplicationError>(OpenedAsset {
                id,
                mime_type,
                reader,
            })
        })
        .await
        .map_err(|e| ApplicationError::internal(format!("Open task panicked: {}", e)))??;

        tracing::info!(asset = %opened.id, "Providing asset");
        Ok(opened)
    }
}
