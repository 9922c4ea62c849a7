//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 故事文档配置
    #[serde(default)]
    pub story: StoryConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 章节页面挂载前缀（如 "/" 或 "/story"）
    #[serde(default = "default_mount_path")]
    pub mount_path: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_mount_path() -> String {
    "/".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            mount_path: default_mount_path(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 规范化后的挂载前缀，根挂载为空串
    pub fn mount_prefix(&self) -> &str {
        self.mount_path.trim().trim_end_matches('/')
    }
}

/// 故事文档配置
#[derive(Debug, Clone, Deserialize)]
pub struct StoryConfig {
    /// JSON 故事文件路径
    #[serde(default = "default_story_file")]
    pub file: PathBuf,
}

fn default_story_file() -> PathBuf {
    PathBuf::from("stories/gopher.json")
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            file: default_story_file(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.mount_path, "/");
        assert_eq!(config.story.file, PathBuf::from("stories/gopher.json"));
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_default_story_file_is_bundled() {
        let config = AppConfig::default();
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(&config.story.file);
        assert!(path.is_file(), "missing {}", path.display());
    }

    #[test]
    fn test_server_addr() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_mount_prefix() {
        let mut config = ServerConfig::default();
        assert_eq!(config.mount_prefix(), "");

        config.mount_path = "/story/".to_string();
        assert_eq!(config.mount_prefix(), "/story");
    }
}
