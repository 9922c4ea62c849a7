//! HTTP Middleware
//!
//! 按响应状态码记录日志：404 是常见情况记为 warn，5xx 记为 error

use axum::{extract::Request, middleware::Next, response::Response};

/// HTTP 状态码日志中间件
///
/// 渲染失败的具体原因在 handler 内记录，这里只记录请求与状态
pub async fn status_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            "Chapter request failed"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            "Chapter request rejected"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::get,
        Router,
    };
    use std::sync::{Arc, Mutex};
    use tower::util::ServiceExt;

    /// 把日志输出收集到内存
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn create_test_router() -> Router {
        Router::new()
            .route("/ok", get(|| async { "OK" }))
            .route("/missing", get(|| async { StatusCode::NOT_FOUND }))
            .route("/broken", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .layer(axum::middleware::from_fn(status_logging_middleware))
    }

    /// 发送请求并返回状态码与期间产生的日志
    async fn request_with_logs(uri: &str) -> (StatusCode, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let request = HttpRequest::builder().uri(uri).body(Body::empty()).unwrap();
        let status = create_test_router()
            .oneshot(request)
            .await
            .unwrap()
            .status();

        (status, logs.contents())
    }

    #[tokio::test]
    async fn test_success_is_not_logged() {
        let (status, logs) = request_with_logs("/ok").await;

        assert_eq!(status, StatusCode::OK);
        assert!(!logs.contains("Chapter request"), "unexpected log: {logs}");
    }

    #[tokio::test]
    async fn test_client_error_logs_warning() {
        let (status, logs) = request_with_logs("/missing").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(logs.contains("WARN"), "logs: {logs}");
        assert!(logs.contains("Chapter request rejected"));
        assert!(logs.contains("path=/missing"));
        assert!(logs.contains("status=404"));
    }

    #[tokio::test]
    async fn test_server_error_logs_error() {
        let (status, logs) = request_with_logs("/broken").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(logs.contains("ERROR"), "logs: {logs}");
        assert!(logs.contains("Chapter request failed"));
        assert!(logs.contains("status=500"));
    }
}
