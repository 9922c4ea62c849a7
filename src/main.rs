//! cyoa - 分支叙事网页服务
//!
//! 启动流程：配置 → 日志 → 加载故事（失败即中止）→ HTTP 服务

use std::sync::Arc;

use anyhow::Context;
use cyoa::application::ChapterHandlerConfig;
use cyoa::config::{load_config, print_config};
use cyoa::infrastructure::adapters::JsonStoryLoader;
use cyoa::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},cyoa={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("cyoa - Choose your own adventure");
    print_config(&config);

    // 故事加载失败时不以部分数据启动
    let story = JsonStoryLoader::load(&config.story.file)
        .await
        .with_context(|| format!("Failed to load story from {}", config.story.file.display()))?;
    tracing::debug!(chapters = ?story.chapter_ids(), "Story chapters");

    let prefix = config.server.mount_prefix();
    let state = AppState::new(Arc::new(story), ChapterHandlerConfig::mounted(prefix));

    let server_config = ServerConfig::new(
        &config.server.host,
        config.server.port,
        &config.server.mount_path,
    );
    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
