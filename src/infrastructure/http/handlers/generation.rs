//! Generation Handlers - 新章节生成 / 章节续写

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{ContinueChapter, GenerateChapter};
use crate::infrastructure::http::dto::{
    ApiResponse, ContinueChapterRequest, GenerateChapterRequest, GenerationResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 生成新章节
pub async fn generate_chapter(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateChapterRequest>,
) -> Result<Json<ApiResponse<GenerationResponse>>, ApiError> {
    let command = GenerateChapter {
        novel_name: req.novel_name,
        protagonist: req.protagonist,
        core_setting: req.core_setting,
        chapter_number: req.chapter_number,
        chapter_title: req.chapter_title,
        word_count: req.word_count,
        settings: req.settings.resolve(&state.defaults)?,
    };

    let output = state.generate_chapter_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(output.into())))
}

/// 章节续写
pub async fn continue_chapter(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ContinueChapterRequest>,
) -> Result<Json<ApiResponse<GenerationResponse>>, ApiError> {
    let command = ContinueChapter {
        previous_text: req.previous_text,
        instruction: req.instruction,
        settings: req.settings.resolve(&state.defaults)?,
    };

    let output = state.continue_chapter_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(output.into())))
}
