//! Chapter Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{ChapterTemplatePort, PathResolverPort};
use crate::application::queries::GetChapter;
use crate::domain::Story;
use crate::infrastructure::adapters::{AskamaChapterTemplate, PrefixPathResolver};

// ============================================================================
// Configuration
// ============================================================================

/// Chapter handler 配置
///
/// 模板与路径解析器各自有默认值，只需覆盖与默认不同的部分。
/// 覆盖是整体替换，不与默认行为合并。
#[derive(Clone)]
pub struct ChapterHandlerConfig {
    pub template: Arc<dyn ChapterTemplatePort>,
    pub path_resolver: Arc<dyn PathResolverPort>,
}

impl ChapterHandlerConfig {
    /// 挂载在 `prefix` 下的默认配置（如 `/story`，根路径为空串或 `/`）
    ///
    /// 默认模板的链接与默认解析器使用同一个前缀。
    pub fn mounted(prefix: &str) -> Self {
        Self {
            template: Arc::new(AskamaChapterTemplate::new(prefix)),
            path_resolver: Arc::new(PrefixPathResolver::new(prefix)),
        }
    }

    pub fn with_template(mut self, template: Arc<dyn ChapterTemplatePort>) -> Self {
        self.template = template;
        self
    }

    pub fn with_path_resolver(mut self, path_resolver: Arc<dyn PathResolverPort>) -> Self {
        self.path_resolver = path_resolver;
        self
    }
}

impl Default for ChapterHandlerConfig {
    fn default() -> Self {
        Self {
            template: Arc::new(AskamaChapterTemplate::root()),
            path_resolver: Arc::new(PrefixPathResolver::root()),
        }
    }
}

impl std::fmt::Debug for ChapterHandlerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChapterHandlerConfig").finish_non_exhaustive()
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// 渲染结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedChapter {
    pub chapter_id: String,
    pub body: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GetChapter Handler
///
/// 解析路径 → 查找章节 → 渲染。全程同步、只读。
pub struct GetChapterHandler {
    story: Arc<Story>,
    template: Arc<dyn ChapterTemplatePort>,
    path_resolver: Arc<dyn PathResolverPort>,
}

impl GetChapterHandler {
    pub fn new(story: Arc<Story>, config: ChapterHandlerConfig) -> Self {
        Self {
            story,
            template: config.template,
            path_resolver: config.path_resolver,
        }
    }

    /// 章节不存在时立即返回，不渲染空章节
    pub fn handle(&self, query: GetChapter) -> Result<RenderedChapter, ApplicationError> {
        let chapter_id = self.path_resolver.resolve(&query.path);

        let chapter = self
            .story
            .chapter(&chapter_id)
            .ok_or_else(|| ApplicationError::chapter_not_found(chapter_id.as_str()))?;

        let body = self.template.render(chapter).map_err(|e| {
            tracing::error!(chapter = %chapter_id, error = %e, "Failed to render chapter");
            ApplicationError::from(e)
        })?;

        tracing::debug!(chapter = %chapter_id, bytes = body.len(), "Chapter rendered");

        Ok(RenderedChapter { chapter_id, body })
    }
}
