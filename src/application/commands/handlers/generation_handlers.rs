//! Generation Command Handlers
//!
//! 处理流程：必填项校验 → 凭证校验 → 构建 Prompt → 生成 → 构建导出文件

use chrono::Local;
use uuid::Uuid;

use crate::application::commands::{
    ContinueChapter, GenerateChapter, GenerationOutput, MAX_WORD_COUNT, MIN_WORD_COUNT,
};
use crate::application::error::ApplicationError;
use crate::application::generation::{
    GenerationClient, GenerationKind, ModelMode, SessionSettings, DEFAULT_CREATIVITY,
};
use crate::application::ports::ApiKey;
use crate::domain::{
    build_continuation_prompt, build_new_chapter_prompt, ContinuationRequest, ExportArtifact,
    NewChapterRequest,
};

const MISSING_CHAPTER_FIELDS: &str = "请填写小说名称、主角、核心设定！";
const MISSING_PREVIOUS_TEXT: &str = "请粘贴需要续写的内容！";
const MISSING_API_KEY: &str = "请输入OpenAI API Key！";

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// 远程模式下必须提供凭证
fn require_credential(settings: &SessionSettings) -> Result<Option<&ApiKey>, ApplicationError> {
    match settings.mode {
        ModelMode::RemoteApi => settings
            .api_key
            .as_ref()
            .filter(|k| !is_blank(k.expose()))
            .map(Some)
            .ok_or_else(|| ApplicationError::missing_credential(MISSING_API_KEY)),
        ModelMode::LocalModel => Ok(None),
    }
}

/// 执行一次生成，返回 (展示文本, 是否失败)
async fn run_generation(
    client: &GenerationClient,
    kind: GenerationKind,
    prompt: &str,
    api_key: Option<&ApiKey>,
) -> (String, bool) {
    match api_key {
        Some(key) => {
            let result = client.generate(prompt, DEFAULT_CREATIVITY, key).await;
            let failed = !result.is_success();
            (result.into_display_text(kind), failed)
        }
        None => (kind.local_model_placeholder().to_string(), false),
    }
}

// ============================================================================
// GenerateChapter
// ============================================================================

/// GenerateChapter Handler - 生成新章节
pub struct GenerateChapterHandler {
    client: GenerationClient,
}

impl GenerateChapterHandler {
    pub fn new(client: GenerationClient) -> Self {
        Self { client }
    }

    pub async fn handle(&self, command: GenerateChapter) -> Result<GenerationOutput, ApplicationError> {
        if is_blank(&command.novel_name)
            || is_blank(&command.protagonist)
            || is_blank(&command.core_setting)
        {
            return Err(ApplicationError::missing_input(MISSING_CHAPTER_FIELDS));
        }

        if command.chapter_number == 0 {
            return Err(ApplicationError::validation("章节号必须大于等于 1"));
        }

        if !(MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&command.word_count) {
            return Err(ApplicationError::validation(format!(
                "字数必须在 {} 到 {} 之间",
                MIN_WORD_COUNT, MAX_WORD_COUNT
            )));
        }

        let api_key = require_credential(&command.settings)?;

        let request = NewChapterRequest {
            novel_name: command.novel_name,
            protagonist: command.protagonist,
            core_setting: command.core_setting,
            chapter_number: command.chapter_number,
            chapter_title: command.chapter_title,
            word_count: command.word_count,
            genre: command.settings.genre,
        };
        let prompt = build_new_chapter_prompt(&request);

        let generation_id = Uuid::new_v4();
        tracing::info!(
            generation_id = %generation_id,
            kind = GenerationKind::NewChapter.as_str(),
            novel_name = %request.novel_name,
            chapter_number = request.chapter_number,
            genre = %request.genre,
            mode = ?command.settings.mode,
            "Generating chapter"
        );

        let (content, failed) =
            run_generation(&self.client, GenerationKind::NewChapter, &prompt, api_key).await;

        let artifact = ExportArtifact::for_chapter(
            &request.novel_name,
            request.chapter_number,
            content.clone(),
            &Local::now(),
        );

        tracing::info!(
            generation_id = %generation_id,
            failed = failed,
            file_name = %artifact.file_name,
            "Chapter generation finished"
        );

        Ok(GenerationOutput {
            heading: format!("《{}》第{}章", request.novel_name, request.chapter_number),
            content,
            failed,
            artifact,
        })
    }
}

// ============================================================================
// ContinueChapter
// ============================================================================

/// ContinueChapter Handler - 章节续写
pub struct ContinueChapterHandler {
    client: GenerationClient,
}

impl ContinueChapterHandler {
    pub fn new(client: GenerationClient) -> Self {
        Self { client }
    }

    pub async fn handle(&self, command: ContinueChapter) -> Result<GenerationOutput, ApplicationError> {
        if is_blank(&command.previous_text) {
            return Err(ApplicationError::missing_input(MISSING_PREVIOUS_TEXT));
        }

        let api_key = require_credential(&command.settings)?;

        let request = ContinuationRequest {
            previous_text: command.previous_text,
            instruction: command.instruction,
            genre: command.settings.genre,
        };
        let prompt = build_continuation_prompt(&request);

        let generation_id = Uuid::new_v4();
        tracing::info!(
            generation_id = %generation_id,
            kind = GenerationKind::Continuation.as_str(),
            previous_chars = request.previous_text.chars().count(),
            genre = %request.genre,
            mode = ?command.settings.mode,
            "Continuing chapter"
        );

        let (content, failed) =
            run_generation(&self.client, GenerationKind::Continuation, &prompt, api_key).await;

        let artifact = ExportArtifact::for_continuation(content.clone(), &Local::now());

        tracing::info!(
            generation_id = %generation_id,
            failed = failed,
            file_name = %artifact.file_name,
            "Continuation finished"
        );

        Ok(GenerationOutput {
            heading: "续写内容".to_string(),
            content,
            failed,
            artifact,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::CompletionError;
    use crate::domain::{lookup, Genre};
    use crate::infrastructure::adapters::FakeCompletionClient;
    use std::sync::Arc;

    fn remote_settings(genre: Genre) -> SessionSettings {
        SessionSettings {
            mode: ModelMode::RemoteApi,
            api_key: Some(ApiKey::new("sk-test")),
            genre,
        }
    }

    fn chapter_command() -> GenerateChapter {
        GenerateChapter {
            novel_name: "剑神归来".to_string(),
            protagonist: "萧炎".to_string(),
            core_setting: "签到流".to_string(),
            chapter_number: 1,
            chapter_title: "开局送神器".to_string(),
            word_count: 1000,
            settings: remote_settings(Genre::Fantasy),
        }
    }

    fn chapter_handler(engine: &Arc<FakeCompletionClient>) -> GenerateChapterHandler {
        GenerateChapterHandler::new(GenerationClient::new(engine.clone()))
    }

    fn continue_handler(engine: &Arc<FakeCompletionClient>) -> ContinueChapterHandler {
        ContinueChapterHandler::new(GenerationClient::new(engine.clone()))
    }

    fn assert_chapter_file_name(file_name: &str, prefix: &str) {
        let stamp = file_name
            .strip_prefix(prefix)
            .and_then(|s| s.strip_suffix(".txt"))
            .unwrap_or_else(|| panic!("unexpected file name: {}", file_name));
        assert_eq!(stamp.len(), 12, "timestamp in {}", file_name);
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn test_end_to_end_chapter_export() {
        let engine = Arc::new(FakeCompletionClient::replying("第一章内容..."));
        let handler = chapter_handler(&engine);

        let output = handler.handle(chapter_command()).await.unwrap();

        assert!(!output.failed);
        assert_eq!(output.heading, "《剑神归来》第1章");
        assert_eq!(output.content, "第一章内容...");
        assert_eq!(output.artifact.content, "第一章内容...");
        assert_eq!(output.artifact.mime_type, "text/plain");
        assert_chapter_file_name(&output.artifact.file_name, "剑神归来_第1章_");
        assert_eq!(engine.call_count(), 1);
    }

    #[tokio::test]
    async fn test_chapter_prompt_sent_to_engine() {
        let engine = Arc::new(FakeCompletionClient::replying("ok"));
        let handler = chapter_handler(&engine);

        handler.handle(chapter_command()).await.unwrap();

        let request = engine.last_request().unwrap();
        let prompt = &request.messages[0].content;
        assert!(prompt.contains("剑神归来"));
        assert!(prompt.contains("萧炎"));
        assert!(prompt.contains("开局送神器"));
        assert!(prompt.contains(lookup(Genre::Fantasy).as_str()));
        assert_eq!(request.temperature, DEFAULT_CREATIVITY);
    }

    #[tokio::test]
    async fn test_missing_fields_never_call_engine() {
        let engine = Arc::new(FakeCompletionClient::replying("ok"));
        let handler = chapter_handler(&engine);

        let blanks: Vec<GenerateChapter> = vec![
            GenerateChapter {
                novel_name: String::new(),
                ..chapter_command()
            },
            GenerateChapter {
                protagonist: String::new(),
                ..chapter_command()
            },
            GenerateChapter {
                core_setting: "   ".to_string(),
                ..chapter_command()
            },
        ];

        for command in blanks {
            let err = handler.handle(command).await.unwrap_err();
            assert_eq!(err, ApplicationError::MissingInput(MISSING_CHAPTER_FIELDS.to_string()));
        }
        assert_eq!(engine.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_credential_never_calls_engine() {
        let engine = Arc::new(FakeCompletionClient::replying("ok"));
        let handler = chapter_handler(&engine);

        for api_key in [None, Some(ApiKey::new(""))] {
            let mut command = chapter_command();
            command.settings.api_key = api_key;
            let err = handler.handle(command).await.unwrap_err();
            assert_eq!(err, ApplicationError::MissingCredential(MISSING_API_KEY.to_string()));
        }
        assert_eq!(engine.call_count(), 0);
    }

    #[tokio::test]
    async fn test_out_of_range_values_rejected() {
        let engine = Arc::new(FakeCompletionClient::replying("ok"));
        let handler = chapter_handler(&engine);

        let zero_chapter = GenerateChapter {
            chapter_number: 0,
            ..chapter_command()
        };
        assert!(matches!(
            handler.handle(zero_chapter).await,
            Err(ApplicationError::ValidationError(_))
        ));

        let too_short = GenerateChapter {
            word_count: MIN_WORD_COUNT - 1,
            ..chapter_command()
        };
        assert!(matches!(
            handler.handle(too_short).await,
            Err(ApplicationError::ValidationError(_))
        ));

        let too_long = GenerateChapter {
            word_count: MAX_WORD_COUNT + 100,
            ..chapter_command()
        };
        assert!(matches!(
            handler.handle(too_long).await,
            Err(ApplicationError::ValidationError(_))
        ));
        assert_eq!(engine.call_count(), 0);
    }

    #[tokio::test]
    async fn test_local_model_returns_placeholder() {
        let engine = Arc::new(FakeCompletionClient::replying("ok"));
        let handler = chapter_handler(&engine);

        let mut command = chapter_command();
        command.settings = SessionSettings {
            mode: ModelMode::LocalModel,
            api_key: None,
            genre: Genre::Urban,
        };
        let output = handler.handle(command).await.unwrap();

        assert_eq!(output.content, "【免费开源模型需本地部署】请参考教程部署ChatGLM后使用");
        assert!(!output.failed);
        assert_eq!(engine.call_count(), 0);
    }

    #[tokio::test]
    async fn test_service_failure_is_displayed() {
        let engine = Arc::new(FakeCompletionClient::failing(CompletionError::Authentication(
            "invalid api key".to_string(),
        )));
        let handler = chapter_handler(&engine);

        let output = handler.handle(chapter_command()).await.unwrap();

        assert!(output.failed);
        assert!(output.content.starts_with("生成失败："));
        assert!(output.content.contains("invalid api key"));
        assert_eq!(output.artifact.content, output.content);
    }

    #[tokio::test]
    async fn test_continuation_export() {
        let engine = Arc::new(FakeCompletionClient::replying("续写内容..."));
        let handler = continue_handler(&engine);

        let output = handler
            .handle(ContinueChapter {
                previous_text: "萧炎转身离去。".to_string(),
                instruction: "主角遇强敌反杀".to_string(),
                settings: remote_settings(Genre::Mystery),
            })
            .await
            .unwrap();

        assert_eq!(output.heading, "续写内容");
        assert_eq!(output.content, "续写内容...");
        assert_eq!(output.artifact.content, "续写内容...");
        assert_chapter_file_name(&output.artifact.file_name, "小说续写_");

        let prompt = engine.last_request().unwrap().messages[0].content.clone();
        assert!(prompt.contains("萧炎转身离去。"));
        assert!(prompt.contains("主角遇强敌反杀"));
        assert!(prompt.contains(lookup(Genre::Mystery).as_str()));
    }

    #[tokio::test]
    async fn test_continuation_requires_previous_text() {
        let engine = Arc::new(FakeCompletionClient::replying("ok"));
        let handler = continue_handler(&engine);

        let err = handler
            .handle(ContinueChapter {
                previous_text: "\n ".to_string(),
                instruction: "随便".to_string(),
                settings: remote_settings(Genre::Fantasy),
            })
            .await
            .unwrap_err();

        assert_eq!(err, ApplicationError::MissingInput(MISSING_PREVIOUS_TEXT.to_string()));
        assert_eq!(engine.call_count(), 0);
    }

    #[tokio::test]
    async fn test_continuation_failure_prefix() {
        let engine = Arc::new(FakeCompletionClient::failing(CompletionError::ServiceError(
            "timeout".to_string(),
        )));
        let handler = continue_handler(&engine);

        let output = handler
            .handle(ContinueChapter {
                previous_text: "上一章".to_string(),
                instruction: String::new(),
                settings: remote_settings(Genre::Romance),
            })
            .await
            .unwrap();

        assert!(output.failed);
        assert!(output.content.starts_with("续写失败："));
        assert!(output.content.contains("timeout"));
    }
}
