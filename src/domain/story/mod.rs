//! Story Context - 故事限界上下文
//!
//! 职责:
//! - 故事聚合（章节映射）
//! - 章节与选项值对象
//! - 故事文档的解码与编码

mod aggregate;
mod entities;
mod errors;

pub use aggregate::{Story, INTRO_CHAPTER};
pub use entities::{Chapter, ChapterOption};
pub use errors::StoryError;
