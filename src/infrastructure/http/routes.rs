//! HTTP Routes
//!
//! 章节页面挂载在一个前缀下，前缀内的任意路径都交给 chapter handler：
//! - 根挂载:        `/`、`/*chapter`
//! - `/story` 挂载: `/story`、`/story/`、`/story/*chapter`

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
///
/// `mount_path` 末尾的 `/` 会被忽略，`/` 与空串都表示根挂载
pub fn create_routes(mount_path: &str) -> Router<Arc<AppState>> {
    let prefix = mount_path.trim().trim_end_matches('/');

    if prefix.is_empty() {
        return Router::new()
            .route("/", get(handlers::serve_chapter))
            .route("/*chapter", get(handlers::serve_chapter));
    }

    Router::new()
        .route(prefix, get(handlers::serve_chapter))
        .route(&format!("{prefix}/"), get(handlers::serve_chapter))
        .route(&format!("{prefix}/*chapter"), get(handlers::serve_chapter))
}
