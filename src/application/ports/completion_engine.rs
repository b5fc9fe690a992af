//! Completion Engine Port - 大模型补全服务抽象
//!
//! 定义对外部 Chat Completion 服务的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 补全服务错误
#[derive(Debug, Clone, Error)]
pub enum CompletionError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limited or quota exceeded: {0}")]
    RateLimited(String),

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// API 凭证
///
/// Debug 输出不包含明文
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// 空白字符串视为未提供
    pub fn non_blank(key: Option<&str>) -> Option<Self> {
        key.map(str::trim)
            .filter(|k| !k.is_empty())
            .map(Self::new)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// 消息角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// 对话消息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// 补全请求
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// 模型标识
    pub model: String,
    /// 对话消息
    pub messages: Vec<ChatMessage>,
    /// 采样温度（创意度）
    pub temperature: f32,
    /// 调用方提供的凭证
    pub api_key: ApiKey,
}

/// 补全响应
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// 生成的文本，原样返回
    pub content: String,
    /// 服务端返回的模型标识
    pub model: Option<String>,
}

/// Completion Engine Port
///
/// 外部大模型补全服务的抽象接口
#[async_trait]
pub trait CompletionEnginePort: Send + Sync {
    /// 发送一次补全请求
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, CompletionError>;

    /// 默认模型标识
    fn model(&self) -> &str;
}
