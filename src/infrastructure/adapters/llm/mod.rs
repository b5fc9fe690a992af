//! LLM Adapter - Chat Completion 客户端实现

mod fake_client;
mod openai_client;

pub use fake_client::FakeCompletionClient;
pub use openai_client::*;
