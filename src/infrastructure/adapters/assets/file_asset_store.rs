//! File Asset Store - 资源包目录实现
//!
//! cookie 为 `assets.packages` 列表中的下标，相对路径在对应目录内解析

use std::fs::File;
use std::io::Read;
use std::path::{Component, Path, PathBuf};

use crate::application::ports::AssetStorePort;
use crate::domain::asset::{AssetError, AssetId};

/// 文件系统资源存储
pub struct FileAssetStore {
    packages: Vec<PathBuf>,
    mime_type: String,
}

impl FileAssetStore {
    pub fn new(packages: Vec<PathBuf>, mime_type: impl Into<String>) -> Self {
        Self {
            packages,
            mime_type: mime_type.into(),
        }
    }

    /// 解析资源文件路径，越界或逃逸包目录均视为不存在
    fn resolve(&self, id: &AssetId) -> Result<PathBuf, AssetError> {
        let not_found = || AssetError::NotFound(id.path());

        let root = self
            .packages
            .get(id.cookie() as usize)
            .ok_or_else(not_found)?;

        let mut path = root.clone();
        for segment in id.relative_path().split('/') {
            if segment.is_empty() {
                return Err(not_found());
            }
            let mut components = Path::new(segment).components();
            match (components.next(), components.next()) {
                (Some(Component::Normal(part)), None) => path.push(part),
                _ => return Err(not_found()),
            }
        }

        if !path.is_file() {
            return Err(not_found());
        }
        Ok(path)
    }
}

impl AssetStorePort for FileAssetStore {
    fn open(&self, id: &AssetId) -> Result<Box<dyn Read + Send>, AssetError> {
        let path = self.resolve(id)?;
        let file = File::open(&path).map_err(|e| {
            tracing::debug!(path = ?path, error = %e, "Asset open failed");
            AssetError::NotFound(id.path())
        })?;
        Ok(Box::new(file))
    }

    fn mime_type(&self, _id: &AssetId) -> String {
        self.mime_type.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_with(dir: &Path) -> FileAssetStore {
        std::fs::create_dir_all(dir.join("html/css")).unwrap();
        std::fs::write(dir.join("html/index.html"), "<p>hi</p>").unwrap();
        std::fs::write(dir.join("html/css/site.css"), "p{}").unwrap();
        FileAssetStore::new(vec![dir.to_path_buf()], "text/html")
    }

    fn read_all(mut reader: Box<dyn Read + Send>) -> String {
        let mut text = String::new();
        reader.read_to_string(&mut text).unwrap();
        text
    }

    #[test]
    fn test_open_existing_asset() {
        let dir = tempdir().unwrap();
        let store = store_with(dir.path());

        let id = AssetId::parse("/0/html/index.html").unwrap();
        assert_eq!(read_all(store.open(&id).unwrap()), "<p>hi</p>");

        let nested = AssetId::parse("/0/html/css/site.css").unwrap();
        assert_eq!(read_all(store.open(&nested).unwrap()), "p{}");
        assert_eq!(store.mime_type(&nested), "text/html");
    }

    #[test]
    fn test_unknown_cookie() {
        let dir = tempdir().unwrap();
        let store = store_with(dir.path());

        let id = AssetId::parse("/7/html/index.html").unwrap();
        assert!(matches!(store.open(&id), Err(AssetError::NotFound(_))));
    }

    #[test]
    fn test_missing_and_directory_paths() {
        let dir = tempdir().unwrap();
        let store = store_with(dir.path());

        for path in ["/0/html/missing.html", "/0/html", "/0/html//index.html"] {
            let id = AssetId::parse(path).unwrap();
            assert!(
                matches!(store.open(&id), Err(AssetError::NotFound(_))),
                "{} should not open",
                path
            );
        }
    }

    #[test]
    fn test_rejects_escaping_paths() {
        let dir = tempdir().unwrap();
        let package = dir.path().join("pkg");
        std::fs::create_dir_all(&package).unwrap();
        std::fs::write(dir.path().join("secret.txt"), "secret").unwrap();
        let store = FileAssetStore::new(vec![package], "text/html");

        for path in ["/0/../secret.txt", "/0/./../secret.txt"] {
            let id = AssetId::parse(path).unwrap();
            assert!(matches!(store.open(&id), Err(AssetError::NotFound(_))));
        }
    }
}
