//! Prefix Path Resolver
//!
//! 默认路径解析策略：
//! 1. 去掉首尾空白
//! 2. 空路径、`/`、挂载前缀本身或前缀加 `/` 解析为入口章节
//! 3. 否则去掉挂载前缀和一个前导 `/`，其余原样作为章节标识
//!
//! 前缀只在路径段边界上匹配：`/storyteller` 不属于 `/story`

use crate::application::ports::PathResolverPort;
use crate::domain::INTRO_CHAPTER;

#[derive(Debug, Clone, Default)]
pub struct PrefixPathResolver {
    prefix: String,
}

impl PrefixPathResolver {
    /// `prefix` 末尾的 `/` 会被去掉，`/` 与空串都表示根路径
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn root() -> Self {
        Self::default()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl PathResolverPort for PrefixPathResolver {
    fn resolve(&self, path: &str) -> String {
        let path = path.trim();
        let rest = path
            .strip_prefix(self.prefix.as_str())
            .filter(|rest| rest.is_empty() || rest.starts_with('/'))
            .unwrap_or(path);

        if rest.is_empty() || rest == "/" {
            return INTRO_CHAPTER.to_string();
        }

        rest.strip_prefix('/').unwrap_or(rest).to_string()
    }
}
