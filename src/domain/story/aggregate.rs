//! Story Context - Aggregate Root

use std::collections::HashMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

use super::{Chapter, StoryError};

/// 故事入口章节标识
pub const INTRO_CHAPTER: &str = "intro";

/// Story 聚合根
///
/// 不变量:
/// - 章节标识唯一，顺序无意义
/// - 加载后只读，由 handler 通过 `Arc` 共享
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Story {
    chapters: HashMap<String, Chapter>,
}

impl Story {
    pub fn new(chapters: HashMap<String, Chapter>) -> Self {
        Self { chapters }
    }

    /// 从字节流解码故事文档
    ///
    /// 解码失败时原样返回 serde_json 的错误，不产生部分结果。
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, StoryError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// 从内存中的文档解码
    pub fn from_slice(bytes: &[u8]) -> Result<Self, StoryError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// 重新编码为故事文档格式（空字段省略）
    pub fn to_json_pretty(&self) -> Result<String, StoryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn chapter(&self, id: &str) -> Option<&Chapter> {
        self.chapters.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.chapters.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// 所有章节标识（排序后，便于日志输出）
    pub fn chapter_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.chapters.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl FromIterator<(String, Chapter)> for Story {
    fn from_iter<I: IntoIterator<Item = (String, Chapter)>>(iter: I) -> Self {
        Self {
            chapters: iter.into_iter().collect(),
        }
    }
}
