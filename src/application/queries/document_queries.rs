//! Document Queries

/// 列出所有文档查询
#[derive(Debug, Clone)]
pub struct ListDocuments;

/// 直接加载文档并分页获取段落
#[derive(Debug, Clone)]
pub struct LoadParagraphs {
    pub document_id: String,
    pub start_index: Option<usize>,
    pub limit: Option<usize>,
}
