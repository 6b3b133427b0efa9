//! Document Context - Entities

use serde::{Deserialize, Serialize};

use super::{DocumentId, DocumentPath, Title};

/// 可供选择的源文档
///
/// 不变量:
/// - 创建后不可修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    id: DocumentId,
    title: Title,
    path: DocumentPath,
}

impl SourceDocument {
    pub fn new(id: DocumentId, title: Title, path: DocumentPath) -> Self {
        Self { id, title, path }
    }

    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn path(&self) -> &DocumentPath {
        &self.path
    }
}
