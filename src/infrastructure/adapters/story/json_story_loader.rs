//! JSON Story Loader
//!
//! 从磁盘读取故事文档并解码，失败即返回错误，由启动流程决定中止

use std::path::Path;

use tokio::fs;

use crate::domain::{Story, StoryError};

pub struct JsonStoryLoader;

impl JsonStoryLoader {
    /// 读取并解码故事文件
    pub async fn load(path: impl AsRef<Path>) -> Result<Story, StoryError> {
        let path = path.as_ref();

        let bytes = fs::read(path).await.map_err(|source| StoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let story = Story::from_slice(&bytes)?;

        tracing::info!(
            path = %path.display(),
            chapters = story.len(),
            "Story loaded"
        );

        Ok(story)
    }
}
