//! Fake Completion Client - 用于测试和离线调试的补全客户端
//!
//! 始终返回固定文本或固定错误，不实际调用外部服务

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::application::ports::{
    CompletionEnginePort, CompletionError, CompletionRequest, CompletionResponse,
};

const FAKE_MODEL: &str = "fake-model";

#[derive(Debug, Clone)]
enum FakeReply {
    Text(String),
    Error(CompletionError),
}

/// Fake Completion Client
///
/// 记录调用次数和最近一次请求，便于断言
pub struct FakeCompletionClient {
    reply: FakeReply,
    calls: AtomicUsize,
    last_request: Mutex<Option<CompletionRequest>>,
}

impl FakeCompletionClient {
    /// 始终返回给定文本
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_reply(FakeReply::Text(text.into()))
    }

    /// 始终返回给定错误
    pub fn failing(error: CompletionError) -> Self {
        Self::with_reply(FakeReply::Error(error))
    }

    fn with_reply(reply: FakeReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// 已收到的请求次数
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// 最近一次收到的请求
    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl CompletionEnginePort for FakeCompletionClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(
            messages = request.messages.len(),
            "FakeCompletionClient: returning fixed reply"
        );
        if let Ok(mut guard) = self.last_request.lock() {
            *guard = Some(request);
        }

        match &self.reply {
            FakeReply::Text(text) => Ok(CompletionResponse {
                content: text.clone(),
                model: Some(FAKE_MODEL.to_string()),
            }),
            FakeReply::Error(err) => Err(err.clone()),
        }
    }

    fn model(&self) -> &str {
        FAKE_MODEL
    }
}
