//! Paragraph Context - Paragraph Sequence

use serde::Serialize;

/// 空行占位符：段落之间的额外空行保留为单个换行
pub const BLANK_LINE_SENTINEL: &str = "\n";

/// 段落序列
///
/// 不变量:
/// - 顺序与原文行序一致
/// - 除空行占位符外，不存在空字符串
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParagraphSequence(Vec<String>);

impl ParagraphSequence {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// 追加一个段落，空字符串会被忽略
    pub(crate) fn push(&mut self, paragraph: String) {
        if !paragraph.is_empty() {
            self.0.push(paragraph);
        }
    }

    pub(crate) fn push_sentinel(&mut self) {
        self.0.push(BLANK_LINE_SENTINEL.to_string());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// 获取指定范围的段落
    pub fn range(&self, start: usize, limit: usize) -> &[String] {
        let end = start.saturating_add(limit).min(self.0.len());
        let start = start.min(end);
        &self.0[start..end]
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for ParagraphSequence {
    fn from(paragraphs: Vec<String>) -> Self {
        let mut sequence = Self::new();
        for paragraph in paragraphs {
            sequence.push(paragraph);
        }
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_paragraphs_are_dropped() {
        let seq = ParagraphSequence::from(vec!["a ".to_string(), String::new(), "\n".to_string()]);
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.get(1), Some(BLANK_LINE_SENTINEL));
    }

    #[test]
    fn test_range_is_clamped() {
        let seq = ParagraphSequence::from(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(seq.range(1, 10), &["b".to_string(), "c".to_string()]);
        assert!(seq.range(5, 2).is_empty());
        assert_eq!(seq.range(0, usize::MAX).len(), 3);
    }
}
