//! Chapter Queries

/// 按请求路径获取渲染后的章节
#[derive(Debug, Clone)]
pub struct GetChapter {
    pub path: String,
}

impl GetChapter {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}
