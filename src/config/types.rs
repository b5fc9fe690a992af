//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::application::ModelMode;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 大模型服务配置
    #[serde(default)]
    pub llm: LlmConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5060
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// 大模型服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// OpenAI 兼容服务的基础 URL
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,

    /// 模型标识
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// 服务端默认 API Key，请求未携带时使用
    #[serde(default)]
    pub api_key: Option<String>,

    /// 请求未指定时的模型模式
    #[serde(default)]
    pub default_mode: ModelMode,

    /// 设置后不调用外部服务，所有生成都返回该文本（离线调试用）
    #[serde(default)]
    pub fake_reply: Option<String>,
}

fn default_llm_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_llm_model() -> String {
    "gpt-3.5-turbo".to_string()
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_llm_base_url(),
            model: default_llm_model(),
            api_key: None,
            default_mode: ModelMode::RemoteApi,
            fake_reply: None,
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5060);
        assert_eq!(config.llm.base_url, "https://api.openai.com/v1");
        assert_eq!(config.llm.model, "gpt-3.5-turbo");
        assert_eq!(config.llm.default_mode, ModelMode::RemoteApi);
        assert!(config.llm.api_key.is_none());
        assert_eq!(config.log.level, "info");
    }
}
