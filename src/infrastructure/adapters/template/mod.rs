//! Template Adapter - askama 章节模板

mod askama_chapter_template;

pub use askama_chapter_template::AskamaChapterTemplate;
