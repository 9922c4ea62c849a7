//! Domain Layer - 领域层
//!
//! Story Context: 分支叙事模型（故事、章节、选项）

pub mod story;

pub use story::{Chapter, ChapterOption, Story, StoryError, INTRO_CHAPTER};
