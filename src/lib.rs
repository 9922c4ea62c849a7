//! cyoa - 分支叙事（Choose Your Own Adventure）网页服务
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Story Context: 故事、章节、选项
//!
//! 应用层 (application/):
//! - Ports: 端口定义（ChapterTemplate, PathResolver）
//! - Queries: 章节查询处理器（解析路径 → 查找 → 渲染）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: axum 路由、错误映射、日志中间件
//! - Adapters: askama 模板、前缀路径解析、JSON 故事加载

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
