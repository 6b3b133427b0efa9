//! File Document Library - 文件系统文档库实现
//!
//! 文档目录下的每个 `.txt` 文件为一个源文档。可选的 `library.toml`
//! 清单指定展示顺序与标题:
//!
//! ```toml
//! [[document]]
//! file = "emerson_poems.txt"
//! title = "Emerson Poems"
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashSet;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::DocumentLibraryPort;
use crate::domain::document::{DocumentError, DocumentId, DocumentPath, SourceDocument, Title};

/// 清单文件名
pub const MANIFEST_FILE: &str = "library.toml";

const TEXT_EXTENSION: &str = "txt";

#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    document: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    file: String,
    title: Option<String>,
}

/// 文件系统文档库
pub struct FileDocumentLibrary {
    /// 文档根目录
    base_dir: PathBuf,
}

impl FileDocumentLibrary {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// 获取文档根目录
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    async fn read_manifest(&self) -> Result<Manifest, DocumentError> {
        let path = self.base_dir.join(MANIFEST_FILE);
        if !path.exists() {
            return Ok(Manifest::default());
        }
        let text = fs::read_to_string(&path)
            .await
            .map_err(|e| DocumentError::ManifestError(e.to_string()))?;
        toml::from_str(&text).map_err(|e| DocumentError::ManifestError(e.to_string()))
    }

    async fn text_files(&self) -> Result<Vec<String>, DocumentError> {
        let mut names = Vec::new();
        let mut entries = fs::read_dir(&self.base_dir)
            .await
            .map_err(|e| DocumentError::FileReadError(e.to_string()))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| DocumentError::FileReadError(e.to_string()))?
        {
            let path = entry.path();
            let is_text = path.extension().map_or(false, |ext| ext == TEXT_EXTENSION);
            if is_text && path.is_file() {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }

    fn document_for(&self, file: &str, title: Option<&str>) -> Result<SourceDocument, DocumentError> {
        let stem = Path::new(file)
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| DocumentError::InvalidId(file.to_string()))?;
        let id = DocumentId::new(stem)?;
        let title = match title {
            Some(title) => Title::new(title)?,
            None => Title::from_stem(stem)?,
        };
        Ok(SourceDocument::new(
            id,
            title,
            DocumentPath::new(self.base_dir.join(file)),
        ))
    }
}

#[async_trait]
impl DocumentLibraryPort for FileDocumentLibrary {
    async fn list(&self) -> Result<Vec<SourceDocument>, DocumentError> {
        let files = self.text_files().await?;
        let manifest = self.read_manifest().await?;

        let mut documents = Vec::with_capacity(files.len());
        let mut listed: HashSet<&str> = HashSet::new();

        for entry in &manifest.document {
            if !files.iter().any(|f| f == &entry.file) {
                tracing::warn!(file = %entry.file, "Manifest entry has no matching file");
                continue;
            }
            if !listed.insert(entry.file.as_str()) {
                continue;
            }
            documents.push(self.document_for(&entry.file, entry.title.as_deref())?);
        }

        for file in &files {
            if !listed.insert(file.as_str()) {
                continue;
            }
            match self.document_for(file, None) {
                Ok(document) => documents.push(document),
                Err(e) => tracing::warn!(file = %file, error = %e, "Skipping document"),
            }
        }

        tracing::debug!(count = documents.len(), dir = ?self.base_dir, "Documents listed");
        Ok(documents)
    }

    async fn find(&self, id: &DocumentId) -> Result<Option<SourceDocument>, DocumentError> {
        Ok(self.list().await?.into_iter().find(|d| d.id() == id))
    }

    fn open(&self, document: &SourceDocument) -> Result<Box<dyn BufRead + Send>, DocumentError> {
        let file = std::fs::File::open(document.path().as_path()).map_err(|e| {
            DocumentError::FileReadError(format!(
                "{}: {}",
                document.path().as_path().display(),
                e
            ))
        })?;
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[tokio::test]
    async fn test_list_without_manifest() {
        let dir = tempdir().unwrap();
        write(dir.path(), "thoreau_excursions.txt", "x");
        write(dir.path(), "bulfinch.txt", "y");
        write(dir.path(), "notes.md", "ignored");

        let library = FileDocumentLibrary::new(dir.path());
        let docs = library.list().await.unwrap();

        let ids: Vec<&str> = docs.iter().map(|d| d.id().as_str()).collect();
        assert_eq!(ids, vec!["bulfinch", "thoreau_excursions"]);
        assert_eq!(docs[1].title().as_str(), "thoreau excursions");
    }

    #[tokio::test]
    async fn test_manifest_orders_and_titles() {
        let dir = tempdir().unwrap();
        write(dir.path(), "a.txt", "x");
        write(dir.path(), "b.txt", "y");
        write(dir.path(), "c.txt", "z");
        write(
            dir.path(),
            MANIFEST_FILE,
            r#"
[[document]]
file = "c.txt"
title = "Emerson Poems"

[[document]]
file = "missing.txt"
title = "Nope"

[[document]]
file = "a.txt"
"#,
        );

        let library = FileDocumentLibrary::new(dir.path());
        let docs = library.list().await.unwrap();

        let titles: Vec<&str> = docs.iter().map(|d| d.title().as_str()).collect();
        assert_eq!(titles, vec!["Emerson Poems", "a", "b"]);
    }

    #[tokio::test]
    async fn test_find_and_open() {
        let dir = tempdir().unwrap();
        write(dir.path(), "poems.txt", "line one\n\n");

        let library = FileDocumentLibrary::new(dir.path());
        let id = DocumentId::new("poems").unwrap();
        let doc = library.find(&id).await.unwrap().unwrap();

        let mut reader = library.open(&doc).unwrap();
        let mut first = String::new();
        reader.read_line(&mut first).unwrap();
        assert_eq!(first, "line one\n");

        let missing = DocumentId::new("missing").unwrap();
        assert!(library.find(&missing).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_invalid_manifest() {
        let dir = tempdir().unwrap();
        write(dir.path(), "a.txt", "x");
        write(dir.path(), MANIFEST_FILE, "[[document]\nfile=");

        let library = FileDocumentLibrary::new(dir.path());
        assert!(matches!(
            library.list().await,
            Err(DocumentError::ManifestError(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_directory() {
        let library = FileDocumentLibrary::new("/nonexistent/treeviewer/library");
        assert!(matches!(
            library.list().await,
            Err(DocumentError::FileReadError(_))
        ));
    }
}
