//! Application State
//!
//! 包含所有 Command Handlers 和会话默认值，构建后只读

use std::sync::Arc;

use crate::application::{
    ApiKey, CompletionEnginePort, ContinueChapterHandler, GenerateChapterHandler, GenerationClient,
    ModelMode,
};

/// 请求未指定时使用的会话默认值（来自配置）
#[derive(Debug, Clone, Default)]
pub struct SessionDefaults {
    pub mode: ModelMode,
    pub api_key: Option<ApiKey>,
}

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub completion_engine: Arc<dyn CompletionEnginePort>,

    // ========== Defaults ==========
    pub defaults: SessionDefaults,

    // ========== Command Handlers ==========
    pub generate_chapter_handler: GenerateChapterHandler,
    pub continue_chapter_handler: ContinueChapterHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(completion_engine: Arc<dyn CompletionEnginePort>, defaults: SessionDefaults) -> Self {
        Self {
            completion_engine: completion_engine.clone(),
            defaults,
            generate_chapter_handler: GenerateChapterHandler::new(GenerationClient::new(
                completion_engine.clone(),
            )),
            continue_chapter_handler: ContinueChapterHandler::new(GenerationClient::new(
                completion_engine,
            )),
        }
    }
}
