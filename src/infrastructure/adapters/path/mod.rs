//! Path Adapter - 默认路径解析

mod prefix_path_resolver;

pub use prefix_path_resolver::PrefixPathResolver;
