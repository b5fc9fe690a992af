//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（CompletionEngine）
//! - generation: 生成客户端与会话设置
//! - commands: 生成 / 续写命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod generation;
pub mod ports;

// Re-exports
pub use commands::{
    ContinueChapter, GenerateChapter, GenerationOutput, MAX_WORD_COUNT, MIN_WORD_COUNT,
    // Handlers
    handlers::{ContinueChapterHandler, GenerateChapterHandler},
};

pub use error::ApplicationError;

pub use generation::{
    GenerationClient, GenerationKind, GenerationResult, ModelMode, SessionSettings,
    DEFAULT_CREATIVITY,
};

pub use ports::{
    ApiKey, ChatMessage, CompletionEnginePort, CompletionError, CompletionRequest,
    CompletionResponse, Role,
};
