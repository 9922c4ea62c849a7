//! Application State
//!
//! 所有请求共享的只读状态

use std::sync::Arc;

use crate::application::{ChapterHandlerConfig, GetChapterHandler};
use crate::domain::Story;

/// 应用状态
///
/// 故事、模板与路径解析器在构造后只读，并发请求无需加锁
pub struct AppState {
    pub chapter_handler: GetChapterHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(story: Arc<Story>, config: ChapterHandlerConfig) -> Self {
        Self {
            chapter_handler: GetChapterHandler::new(story, config),
        }
    }
}
