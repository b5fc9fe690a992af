//! novelgen - AI 小说章节生成服务
//!
//! - Domain: story/ (风格目录、Prompt、导出)
//! - Application: commands, generation, ports
//! - Infrastructure: http, adapters

use std::sync::Arc;

use novelgen::application::{ApiKey, CompletionEnginePort};
use novelgen::config::{load_config, print_config, AppConfig};
use novelgen::infrastructure::adapters::{
    FakeCompletionClient, OpenAiChatClient, OpenAiChatClientConfig,
};
use novelgen::infrastructure::http::{AppState, HttpServer, ServerConfig, SessionDefaults};

fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},novelgen={},tower_http=debug",
        config.log.level, config.log.level
    );
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}

fn build_engine(config: &AppConfig) -> anyhow::Result<Arc<dyn CompletionEnginePort>> {
    if let Some(reply) = &config.llm.fake_reply {
        return Ok(Arc::new(FakeCompletionClient::replying(reply.clone())));
    }

    let client_config =
        OpenAiChatClientConfig::new(&config.llm.base_url).with_model(&config.llm.model);
    Ok(Arc::new(OpenAiChatClient::new(client_config)?))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("novelgen - AI 小说章节生成服务");
    print_config(&config);

    let engine = build_engine(&config)?;

    let defaults = SessionDefaults {
        mode: config.llm.default_mode,
        api_key: ApiKey::non_blank(config.llm.api_key.as_deref()),
    };
    let state = AppState::new(engine, defaults);

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
