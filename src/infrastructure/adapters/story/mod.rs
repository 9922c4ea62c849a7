//! Story Adapter - 故事文档加载

mod json_story_loader;

pub use json_story_loader::JsonStoryLoader;
