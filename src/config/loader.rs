//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, LlmConfig};
use crate::application::ApiKey;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "NOVELGEN";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `NOVELGEN_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `NOVELGEN_SERVER__PORT=8080`
/// - `NOVELGEN_LLM__BASE_URL=https://api.deepseek.com/v1`
/// - `NOVELGEN_LLM__API_KEY=sk-xxx`
/// - `NOVELGEN_LLM__DEFAULT_MODE=local_model`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5060)?
        .set_default("llm.base_url", "https://api.openai.com/v1")?
        .set_default("llm.model", "gpt-3.5-turbo")?
        .set_default("llm.default_mode", "remote_api")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        // 搜索默认配置文件
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 注意: 环境变量名会被转换为小写
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    // 6. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    // 验证端口范围
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    // 验证大模型服务地址
    if config.llm.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "LLM base URL cannot be empty".to_string(),
        ));
    }

    if config.llm.model.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "LLM model cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 与请求侧一致：空白 Key 视为未设置
fn api_key_status(llm: &LlmConfig) -> &'static str {
    if ApiKey::non_blank(llm.api_key.as_deref()).is_some() {
        "set"
    } else {
        "unset"
    }
}

/// 打印配置信息（用于启动时日志）
///
/// API Key 只显示是否已设置
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("LLM Base URL: {}", config.llm.base_url);
    tracing::info!("LLM Model: {}", config.llm.model);
    tracing::info!("LLM Default Mode: {:?}", config.llm.default_mode);
    tracing::info!("LLM API Key: {}", api_key_status(&config.llm));
    if config.llm.fake_reply.is_some() {
        tracing::warn!("LLM fake reply enabled, external service will not be called");
    }
    tracing::info!("Log Level: {} (json: {})", config.log.level, config.log.json);
    tracing::info!("=================================");
}
