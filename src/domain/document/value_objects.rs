//! Document Context - Value Objects

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::DocumentError;

/// 文档唯一标识（文件名去掉扩展名）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Result<Self, DocumentError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DocumentError::InvalidId("文档 ID 不能为空".to_string()));
        }
        if id.contains(['/', '\\']) || id == "." || id == ".." {
            return Err(DocumentError::InvalidId(format!("文档 ID 不能包含路径: {}", id)));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 文档标题（用于选择列表）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title(String);

impl Title {
    pub fn new(title: impl Into<String>) -> Result<Self, DocumentError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DocumentError::InvalidTitle("标题不能为空".to_string()));
        }
        if title.chars().count() > 200 {
            return Err(DocumentError::InvalidTitle("标题长度不能超过200字符".to_string()));
        }
        Ok(Self(title))
    }

    /// 从文件名推导标题：下划线替换为空格
    pub fn from_stem(stem: &str) -> Result<Self, DocumentError> {
        Self::new(stem.replace('_', " "))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 文档文件路径
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPath(PathBuf);

impl DocumentPath {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl From<PathBuf> for DocumentPath {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl From<&str> for DocumentPath {
    fn from(path: &str) -> Self {
        Self(PathBuf::from(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_id_rejects_paths() {
        assert!(DocumentId::new("emerson_poems").is_ok());
        assert!(DocumentId::new("").is_err());
        assert!(DocumentId::new("../etc/passwd").is_err());
        assert!(DocumentId::new("a\\b").is_err());
        assert!(DocumentId::new("..").is_err());
    }

    #[test]
    fn test_title_from_stem() {
        let title = Title::from_stem("thoreau_excursions").unwrap();
        assert_eq!(title.as_str(), "thoreau excursions");
        assert!(Title::new("   ").is_err());
    }
}
