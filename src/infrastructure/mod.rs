//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现，以及 HTTP 接入

pub mod adapters;
pub mod http;

pub use adapters::{AskamaChapterTemplate, JsonStoryLoader, PrefixPathResolver};
