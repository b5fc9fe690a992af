//! Ping Handler
//!
//! 健康检查与未匹配路由

use axum::{extract::State, http::Uri, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub model: String,
}

/// Ping endpoint - 健康检查
pub async fn ping(State(state): State<Arc<AppState>>) -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        model: state.completion_engine.model().to_string(),
    })
}

/// 未匹配的路由
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
