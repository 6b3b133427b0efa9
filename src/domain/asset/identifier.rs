//! Asset Context - Asset Identifier
//!
//! 标识格式: `/<cookie>/<relative-path>`

use serde::Serialize;
use std::str::FromStr;

use super::AssetError;

/// 资源标识
///
/// cookie 选择资源包，relative_path 为包内以 `/` 分隔的路径
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AssetId {
    cookie: u32,
    relative_path: String,
}

impl AssetId {
    pub fn new(cookie: u32, relative_path: impl Into<String>) -> Result<Self, AssetError> {
        let relative_path = relative_path.into();
        if relative_path.is_empty() {
            return Err(AssetError::NotFound(format!("/{}/", cookie)));
        }
        Ok(Self {
            cookie,
            relative_path,
        })
    }

    /// 解析标识路径
    ///
    /// 第二个 `/` 从下标 1 开始查找；缺失或位于末尾、cookie 非数字均视为不存在
    pub fn parse(path: &str) -> Result<Self, AssetError> {
        let not_found = || AssetError::NotFound(path.to_string());

        if !path.starts_with('/') {
            return Err(not_found());
        }
        let off = path[1..].find('/').map(|i| i + 1).ok_or_else(not_found)?;
        if off >= path.len() - 1 {
            return Err(not_found());
        }

        let cookie_str = &path[1..off];
        if cookie_str.is_empty() || !cookie_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(not_found());
        }
        let cookie = cookie_str.parse::<u32>().map_err(|_| not_found())?;

        Ok(Self {
            cookie,
            relative_path: path[off + 1..].to_string(),
        })
    }

    pub fn cookie(&self) -> u32 {
        self.cookie
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// 标识路径（同时作为显示名）
    pub fn path(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}/{}", self.cookie, self.relative_path)
    }
}

impl FromStr for AssetId {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let id = AssetId::parse("/3/images/pic.png").unwrap();
        assert_eq!(id.cookie(), 3);
        assert_eq!(id.relative_path(), "images/pic.png");
        assert_eq!(id.path(), "/3/images/pic.png");
    }

    #[test]
    fn test_parse_nested_path() {
        let id: AssetId = "/2/res/drawable-nodpi-v4/jellies.jpg".parse().unwrap();
        assert_eq!(id.cookie(), 2);
        assert_eq!(id.relative_path(), "res/drawable-nodpi-v4/jellies.jpg");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for path in ["/abc", "/abc/", "/3/", "/3", "", "/", "//x", "3/x", "/x/y", "/-1/y", "/ 3/y"] {
            assert!(
                matches!(AssetId::parse(path), Err(AssetError::NotFound(_))),
                "{:?} should be rejected",
                path
            );
        }
    }

    #[test]
    fn test_parse_rejects_cookie_overflow() {
        assert!(AssetId::parse("/99999999999/a.txt").is_err());
    }

    #[test]
    fn test_new_rejects_empty_path() {
        assert!(AssetId::new(1, "").is_err());
        assert_eq!(AssetId::new(1, "a/b").unwrap().to_string(), "/1/a/b");
    }
}
