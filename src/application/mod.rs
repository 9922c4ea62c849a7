//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（ChapterTemplate、PathResolver）
//! - queries: 章节查询及处理器
//! - error: 应用层错误定义

pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use error::ApplicationError;

pub use ports::{ChapterTemplatePort, PathResolverPort, TemplateError};

pub use queries::{
    GetChapter,
    // Handlers
    handlers::{ChapterHandlerConfig, GetChapterHandler, RenderedChapter},
};
