//! HTTP Middleware
//!
//! 请求耗时与 HTTP 状态码错误日志

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// 请求日志中间件
///
/// 生成请求可能阻塞数十秒，这里记录每个请求的耗时；
/// 4xx 记 warn，5xx 记 error。业务错误（errno != 0）在 ApiError::into_response() 中记录
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP client error"
        );
    } else {
        tracing::debug!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP request completed"
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
        routing::post,
        Router,
    };
    use tower::util::ServiceExt;

    fn create_test_router() -> Router {
        Router::new()
            .route("/ok", post(|| async { "OK" }))
            .route("/unprocessable", post(|| async { StatusCode::UNPROCESSABLE_ENTITY }))
            .route("/error", post(|| async { StatusCode::BAD_GATEWAY }))
            .layer(axum::middleware::from_fn(request_logging_middleware))
    }

    async fn status_of(uri: &str) -> StatusCode {
        let request = HttpRequest::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        create_test_router().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_responses_pass_through_unchanged() {
        assert_eq!(status_of("/ok").await, StatusCode::OK);
        assert_eq!(status_of("/unprocessable").await, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(status_of("/error").await, StatusCode::BAD_GATEWAY);
    }
}
