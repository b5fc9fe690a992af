//! OpenAI Chat Client - 调用 OpenAI 兼容的 Chat Completion 服务
//!
//! 实现 CompletionEnginePort trait
//!
//! 外部 API:
//! POST {base_url}/chat/completions
//! Header: Authorization: Bearer {api_key}
//! Request: {"model": "...", "messages": [{"role": "user", "content": "..."}], "temperature": 0.8}
//! Response: {"model": "...", "choices": [{"message": {"role": "assistant", "content": "..."}}]}

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::application::ports::{
    ChatMessage, CompletionEnginePort, CompletionError, CompletionRequest, CompletionResponse,
};

/// Chat Completion 请求体 (JSON)
#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionReply {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// OpenAI 客户端配置
#[derive(Debug, Clone)]
pub struct OpenAiChatClientConfig {
    /// API 基础 URL（不含 /chat/completions）
    pub base_url: String,
    /// 模型标识
    pub model: String,
}

impl Default for OpenAiChatClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo".to_string(),
        }
    }
}

impl OpenAiChatClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// OpenAI Chat 客户端
pub struct OpenAiChatClient {
    client: Client,
    config: OpenAiChatClientConfig,
}

impl OpenAiChatClient {
    /// 创建新的客户端（不设置超时）
    pub fn new(config: OpenAiChatClientConfig) -> Result<Self, CompletionError> {
        let client = Client::builder()
            .build()
            .map_err(|e| CompletionError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }
}

/// 按 HTTP 状态码归类服务端错误
fn classify_status(status: StatusCode, body: String) -> CompletionError {
    let detail = format!("HTTP {}: {}", status, body);
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CompletionError::Authentication(detail),
        StatusCode::TOO_MANY_REQUESTS => CompletionError::RateLimited(detail),
        _ => CompletionError::ServiceError(detail),
    }
}

#[async_trait]
impl CompletionEnginePort for OpenAiChatClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, CompletionError> {
        let body = ChatCompletionBody {
            model: &request.model,
            messages: &request.messages,
            temperature: request.temperature,
        };

        tracing::debug!(
            url = %self.completions_url(),
            model = %request.model,
            messages = request.messages.len(),
            temperature = request.temperature,
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(request.api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Timeout
                } else if e.is_connect() {
                    CompletionError::NetworkError(format!("Cannot connect to completion service: {}", e))
                } else {
                    CompletionError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(classify_status(status, error_text));
        }

        let reply: ChatCompletionReply = response
            .json()
            .await
            .map_err(|e| CompletionError::InvalidResponse(format!("Failed to parse reply: {}", e)))?;

        let content = reply
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| CompletionError::InvalidResponse("Reply has no message content".to_string()))?;

        tracing::info!(
            model = ?reply.model,
            content_chars = content.chars().count(),
            "Chat completion received"
        );

        Ok(CompletionResponse {
            content,
            model: reply.model,
        })
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}
