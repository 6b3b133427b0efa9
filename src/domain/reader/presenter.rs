//! Reader Context - List Presenter

use rand::Rng;

use super::PresenterError;
use crate::domain::paragraph::ParagraphSequence;

/// 列表展示器
///
/// 持有当前绑定的段落序列与滚动位置，每个实例独立
#[derive(Debug, Clone, Default)]
pub struct ListPresenter {
    items: ParagraphSequence,
    scroll_position: usize,
}

impl ListPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(items: ParagraphSequence) -> Self {
        Self {
            items,
            scroll_position: 0,
        }
    }

    /// 替换数据，滚动位置回到顶部
    pub fn set_data(&mut self, items: ParagraphSequence) {
        self.items = items;
        self.scroll_position = 0;
    }

    pub fn clear(&mut self) {
        self.set_data(ParagraphSequence::new());
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn item(&self, index: usize) -> Option<&str> {
        self.items.get(index)
    }

    pub fn items(&self, start: usize, limit: usize) -> &[String] {
        self.items.range(start, limit)
    }

    pub fn scroll_position(&self) -> usize {
        self.scroll_position
    }

    pub fn scroll_to(&mut self, index: usize) -> Result<usize, PresenterError> {
        if index >= self.items.len() {
            return Err(PresenterError::IndexOutOfRange {
                index,
                count: self.items.len(),
            });
        }
        self.scroll_position = index;
        Ok(index)
    }

    /// 随机跳转到 `[0, count)` 中的一项，空序列返回 None
    pub fn jump_to_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        let selection = rng.gen_range(0..self.items.len());
        self.scroll_position = selection;
        tracing::debug!(selection, count = self.items.len(), "Jumped to random entry");
        Some(selection)
    }
}

/// 随机跳转提示语
pub fn jump_message(selection: usize) -> String {
    format!("Moving to verse {}", selection)
}
