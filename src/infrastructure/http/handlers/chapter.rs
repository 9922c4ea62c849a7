//! Chapter HTTP Handler

use std::sync::Arc;

use axum::{extract::State, http::Uri, response::Html};
use percent_encoding::percent_decode_str;

use crate::application::GetChapter;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 渲染请求路径对应的章节
///
/// 路径解析使用完整的请求路径（含挂载前缀），由配置的解析器负责去掉前缀。
/// 路径先做百分号解码，解码结果不是合法 UTF-8 时视为章节不存在。
pub async fn serve_chapter(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<Html<String>, ApiError> {
    let path = percent_decode_str(uri.path())
        .decode_utf8()
        .map_err(|_| ApiError::NotFound(uri.path().to_owned()))?;

    let rendered = state.chapter_handler.handle(GetChapter::new(path))?;

    Ok(Html(rendered.body))
}
