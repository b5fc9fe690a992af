//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod completion_engine;

pub use completion_engine::{
    ApiKey, ChatMessage, CompletionEnginePort, CompletionError, CompletionRequest,
    CompletionResponse, Role,
};
