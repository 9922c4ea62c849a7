//! 应用层 - 查询（读操作）
//!
//! 故事是只读的，所有用例都是查询

mod chapter_queries;

pub mod handlers;

pub use chapter_queries::*;
