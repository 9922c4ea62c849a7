//! HTTP Error Handling
//!
//! 错误响应为纯文本，不向客户端暴露内部细节

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::application::ApplicationError;

pub const NOT_FOUND_MESSAGE: &str = "Chapter not found";
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong...";

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::NotFound(chapter) => {
                tracing::debug!(chapter = %chapter, "Chapter not found");
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE).into_response()
            }
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::ChapterNotFound(id) => ApiError::NotFound(id),
            ApplicationError::RenderFailed(msg) => ApiError::Internal(msg),
        }
    }
}
