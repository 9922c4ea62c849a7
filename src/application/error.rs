//! 应用层错误定义
//!
//! 统一的查询错误类型

use thiserror::Error;

use super::ports::TemplateError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 请求的章节不在故事中
    #[error("Chapter not found: {0}")]
    ChapterNotFound(String),

    /// 模板执行失败
    #[error("Render failed: {0}")]
    RenderFailed(String),
}

impl ApplicationError {
    pub fn chapter_not_found(id: impl Into<String>) -> Self {
        Self::ChapterNotFound(id.into())
    }
}

impl From<TemplateError> for ApplicationError {
    fn from(err: TemplateError) -> Self {
        Self::RenderFailed(err.to_string())
    }
}
