//! Paragraph Context - 段落上下文
//!
//! 职责:
//! - 文本流到段落序列的转换
//! - 段落序列值对象

mod loader;
mod sequence;

pub use loader::{load_paragraphs, load_paragraphs_default, LoadOptions};
pub use sequence::{ParagraphSequence, BLANK_LINE_SENTINEL};
