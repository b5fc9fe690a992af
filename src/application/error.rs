//! 应用层错误定义
//!
//! 统一的命令错误类型

use thiserror::Error;

/// 应用层错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    /// 必填项缺失（不发起生成）
    #[error("{0}")]
    MissingInput(String),

    /// 远程模式下缺少 API Key（不发起生成）
    #[error("{0}")]
    MissingCredential(String),

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl ApplicationError {
    /// 创建必填项缺失错误
    pub fn missing_input(message: impl Into<String>) -> Self {
        Self::MissingInput(message.into())
    }

    /// 创建缺少凭证错误
    pub fn missing_credential(message: impl Into<String>) -> Self {
        Self::MissingCredential(message.into())
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}
