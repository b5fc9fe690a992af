//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::{ApiKey, GenerationOutput, ModelMode, SessionSettings};
use crate::domain::Genre;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::SessionDefaults;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Session Settings
// ============================================================================

/// 请求携带的会话设置，缺省字段取配置默认值
#[derive(Debug, Default, Deserialize)]
pub struct SettingsDto {
    #[serde(default)]
    pub mode: Option<ModelMode>,
    #[serde(default)]
    pub api_key: Option<String>,
    /// 英文标签或中文名称
    #[serde(default)]
    pub genre: Option<String>,
}

impl SettingsDto {
    pub fn resolve(self, defaults: &SessionDefaults) -> Result<SessionSettings, ApiError> {
        let genre = match self.genre.as_deref() {
            Some(g) => g
                .parse::<Genre>()
                .map_err(|e| ApiError::BadRequest(e.to_string()))?,
            None => Genre::default(),
        };

        Ok(SessionSettings {
            mode: self.mode.unwrap_or(defaults.mode),
            api_key: ApiKey::non_blank(self.api_key.as_deref()).or_else(|| defaults.api_key.clone()),
            genre,
        })
    }
}

// ============================================================================
// Generation DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GenerateChapterRequest {
    #[serde(default)]
    pub novel_name: String,
    #[serde(default)]
    pub protagonist: String,
    #[serde(default)]
    pub core_setting: String,
    #[serde(default = "default_chapter_number")]
    pub chapter_number: u32,
    #[serde(default)]
    pub chapter_title: String,
    #[serde(default = "default_word_count")]
    pub word_count: u32,
    #[serde(default)]
    pub settings: SettingsDto,
}

fn default_chapter_number() -> u32 {
    1
}

fn default_word_count() -> u32 {
    1000
}

#[derive(Debug, Deserialize)]
pub struct ContinueChapterRequest {
    #[serde(default)]
    pub previous_text: String,
    #[serde(default)]
    pub instruction: String,
    #[serde(default)]
    pub settings: SettingsDto,
}

#[derive(Debug, Serialize)]
pub struct ExportInfo {
    pub file_name: String,
    pub mime_type: String,
}

#[derive(Debug, Serialize)]
pub struct GenerationResponse {
    pub heading: String,
    pub content: String,
    pub failed: bool,
    pub export: ExportInfo,
}

impl From<GenerationOutput> for GenerationResponse {
    fn from(output: GenerationOutput) -> Self {
        Self {
            heading: output.heading,
            content: output.content,
            failed: output.failed,
            export: ExportInfo {
                file_name: output.artifact.file_name,
                mime_type: output.artifact.mime_type.to_string(),
            },
        }
    }
}

// ============================================================================
// Style DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct StyleResponse {
    pub genre: Genre,
    pub label: String,
    pub directive: String,
}

// ============================================================================
// Export DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub file_name: String,
    pub content: String,
}
