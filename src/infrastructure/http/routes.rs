//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping              GET   健康检查
//! - /api/styles            GET   风格目录
//! - /api/chapter/generate  POST  生成新章节
//! - /api/chapter/continue  POST  章节续写
//! - /api/export            POST  导出 TXT（附件下载）

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/styles", get(handlers::list_styles))
        .nest("/chapter", chapter_routes())
        .route("/export", post(handlers::export_text))
}

/// Chapter 路由
fn chapter_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/generate", post(handlers::generate_chapter))
        .route("/continue", post(handlers::continue_chapter))
}
