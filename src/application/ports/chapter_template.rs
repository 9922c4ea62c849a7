//! Chapter Template Port - 章节渲染抽象
//!
//! 定义章节渲染的抽象接口，默认实现在 infrastructure/adapters 层

use thiserror::Error;

use crate::domain::Chapter;

/// 模板渲染错误
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template rendering failed: {0}")]
    Render(String),
}

/// Chapter Template Port
///
/// 将一个章节渲染为完整的响应正文（通常是 HTML 页面）。
/// 实现必须是只读的，同一章节多次渲染结果一致。
pub trait ChapterTemplatePort: Send + Sync {
    fn render(&self, chapter: &Chapter) -> Result<String, TemplateError>;
}
