//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod chapter_template;
mod path_resolver;

pub use chapter_template::{ChapterTemplatePort, TemplateError};
pub use path_resolver::PathResolverPort;
