//! Asset Context - Metadata Query
//!
//! 支持按列投影的单行元数据查询

use serde_json::Value;

use super::AssetId;

/// 显示名列
pub const COLUMN_DISPLAY_NAME: &str = "_display_name";

/// 大小列
pub const COLUMN_SIZE: &str = "_size";

/// 资源大小未知，固定返回的占位值
pub const PLACEHOLDER_SIZE: u64 = 42;

/// 元数据查询结果（单行）
#[derive(Debug, Clone, PartialEq)]
pub struct AssetMetadata {
    pub columns: Vec<String>,
    pub row: Vec<Value>,
}

impl AssetMetadata {
    /// 按投影构造元数据行
    ///
    /// 投影为空时返回全部列；未知列的值为 null
    pub fn query(id: &AssetId, projection: Option<&[String]>) -> Self {
        let columns: Vec<String> = match projection {
            Some(cols) => cols.to_vec(),
            None => vec![COLUMN_DISPLAY_NAME.to_string(), COLUMN_SIZE.to_string()],
        };

        let row = columns
            .iter()
            .map(|column| match column.as_str() {
                COLUMN_DISPLAY_NAME => Value::String(id.path()),
                COLUMN_SIZE => Value::from(PLACEHOLDER_SIZE),
                _ => Value::Null,
            })
            .collect();

        Self { columns, row }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> AssetId {
        AssetId::parse("/3/images/pic.png").unwrap()
    }

    #[test]
    fn test_default_projection() {
        let meta = AssetMetadata::query(&id(), None);
        assert_eq!(meta.columns, vec![COLUMN_DISPLAY_NAME, COLUMN_SIZE]);
        assert_eq!(
            meta.row,
            vec![
                Value::String("/3/images/pic.png".to_string()),
                Value::from(PLACEHOLDER_SIZE)
            ]
        );
    }

    #[test]
    fn test_custom_projection_order_and_unknown() {
        let projection = vec![
            COLUMN_SIZE.to_string(),
            "mime".to_string(),
            COLUMN_DISPLAY_NAME.to_string(),
        ];
        let meta = AssetMetadata::query(&id(), Some(&projection));
        assert_eq!(meta.row[0], Value::from(42u64));
        assert_eq!(meta.row[1], Value::Null);
        assert_eq!(meta.row[2], Value::String("/3/images/pic.png".to_string()));
    }

    #[test]
    fn test_size_only_projection() {
        let projection = vec![COLUMN_SIZE.to_string()];
        let meta = AssetMetadata::query(&id(), Some(&projection));
        assert_eq!(meta.columns, vec![COLUMN_SIZE]);
        assert_eq!(meta.row, vec![Value::from(42u64)]);
    }
}
