//! Story Context - Entities

use serde::{Deserialize, Serialize};

/// 章节 - 叙事的一页
///
/// 文档中缺省的字段解码为空值，编码时空值字段被省略。
/// 选项可以指向故事中不存在的章节，这里不做校验。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// 章节标题
    #[serde(default, skip_serializing_if = "String::is_empty")]
    title: String,
    /// 正文段落（文档字段名为 `story`）
    #[serde(rename = "story", default, skip_serializing_if = "Vec::is_empty")]
    paragraphs: Vec<String>,
    /// 读者可选的去向
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    options: Vec<ChapterOption>,
}

impl Chapter {
    pub fn new(
        title: impl Into<String>,
        paragraphs: Vec<String>,
        options: Vec<ChapterOption>,
    ) -> Self {
        Self {
            title: title.into(),
            paragraphs,
            options,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    pub fn options(&self) -> &[ChapterOption] {
        &self.options
    }
}

/// 章节选项 - 指向另一章节的带标签链接
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterOption {
    /// 显示文本
    #[serde(default, skip_serializing_if = "String::is_empty")]
    text: String,
    /// 目标章节标识（文档字段名为 `arc`）
    #[serde(rename = "arc", default, skip_serializing_if = "String::is_empty")]
    chapter: String,
}

impl ChapterOption {
    pub fn new(text: impl Into<String>, chapter: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            chapter: chapter.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn chapter(&self) -> &str {
        &self.chapter
    }
}
