//! Path Resolver Port - 请求路径到章节标识的映射

/// Path Resolver Port
///
/// 纯函数：不做 I/O，相同路径总是得到相同标识。
pub trait PathResolverPort: Send + Sync {
    fn resolve(&self, path: &str) -> String;
}

impl<F> PathResolverPort for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn resolve(&self, path: &str) -> String {
        self(path)
    }
}
