//! Generation Client - 生成客户端
//!
//! 封装一次对外部补全服务的调用：
//! - 成功：原样返回生成文本
//! - 失败：任何错误都转换为可展示的失败结果，从不向调用方传播

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::application::ports::{ApiKey, ChatMessage, CompletionEnginePort, CompletionRequest};
use crate::domain::Genre;

/// 创意度（temperature），固定值
pub const DEFAULT_CREATIVITY: f32 = 0.8;

/// 生成模型模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelMode {
    /// 远程 API（需要 API Key）
    #[default]
    RemoteApi,
    /// 本地开源模型（未实现，返回占位提示）
    LocalModel,
}

/// 会话设置
///
/// 模型模式、凭证和风格随每次命令显式传入
#[derive(Debug, Clone, Default)]
pub struct SessionSettings {
    pub mode: ModelMode,
    pub api_key: Option<ApiKey>,
    pub genre: Genre,
}

/// 生成类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationKind {
    NewChapter,
    Continuation,
}

impl GenerationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationKind::NewChapter => "new_chapter",
            GenerationKind::Continuation => "continuation",
        }
    }

    /// 失败提示前缀
    pub fn failure_prefix(&self) -> &'static str {
        match self {
            GenerationKind::NewChapter => "生成失败",
            GenerationKind::Continuation => "续写失败",
        }
    }

    /// 本地模型占位文本
    pub fn local_model_placeholder(&self) -> &'static str {
        match self {
            GenerationKind::NewChapter => "【免费开源模型需本地部署】请参考教程部署ChatGLM后使用",
            GenerationKind::Continuation => "【免费开源模型需本地部署】",
        }
    }
}

/// 生成结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
    /// 生成成功，文本未经修改
    Generated { text: String },
    /// 生成失败，附带可读的失败原因
    Failed { reason: String },
}

impl GenerationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationResult::Generated { .. })
    }

    /// 结果中的文本（成功为生成内容，失败为失败原因）
    pub fn text(&self) -> &str {
        match self {
            GenerationResult::Generated { text } => text,
            GenerationResult::Failed { reason } => reason,
        }
    }

    /// 转换为展示给用户的文本
    pub fn into_display_text(self, kind: GenerationKind) -> String {
        match self {
            GenerationResult::Generated { text } => text,
            GenerationResult::Failed { reason } => {
                format!("{}：{}", kind.failure_prefix(), reason)
            }
        }
    }
}

/// Generation Client
pub struct GenerationClient {
    engine: Arc<dyn CompletionEnginePort>,
}

impl GenerationClient {
    pub fn new(engine: Arc<dyn CompletionEnginePort>) -> Self {
        Self { engine }
    }

    /// 发送一次生成请求
    ///
    /// 不重试，不缓存；任何错误都转换为 `GenerationResult::Failed`
    pub async fn generate(&self, prompt: &str, creativity: f32, api_key: &ApiKey) -> GenerationResult {
        if prompt.trim().is_empty() {
            tracing::warn!("Refusing to send empty prompt");
            return GenerationResult::Failed {
                reason: "prompt is empty".to_string(),
            };
        }

        let request = CompletionRequest {
            model: self.engine.model().to_string(),
            messages: vec![ChatMessage::user(prompt)],
            temperature: creativity,
            api_key: api_key.clone(),
        };

        match self.engine.complete(request).await {
            Ok(response) => {
                tracing::info!(
                    model = ?response.model,
                    prompt_chars = prompt.chars().count(),
                    output_chars = response.content.chars().count(),
                    "Generation completed"
                );
                GenerationResult::Generated {
                    text: response.content,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Generation failed");
                GenerationResult::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
