//! Style Handlers

use axum::Json;

use crate::domain::story::catalog;
use crate::infrastructure::http::dto::{ApiResponse, StyleResponse};

/// 列出全部风格及其提示词
pub async fn list_styles() -> Json<ApiResponse<Vec<StyleResponse>>> {
    let styles = catalog()
        .into_iter()
        .map(|(genre, directive)| StyleResponse {
            genre,
            label: genre.label().to_string(),
            directive: directive.to_string(),
        })
        .collect();

    Json(ApiResponse::success(styles))
}
