//! novelgen - AI 小说章节生成服务
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Story Context: 风格目录、Prompt 构建、TXT 导出
//!
//! 应用层 (application/):
//! - Ports: CompletionEngine
//! - Generation: 生成客户端（错误转换为可展示文本）
//! - Commands: 新章节生成、章节续写
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Adapters: OpenAI Chat Client, Fake Client

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::{load_config, AppConfig};
