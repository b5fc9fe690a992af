//! Generation Commands - 生成相关命令

use crate::application::generation::SessionSettings;
use crate::domain::ExportArtifact;

/// 新章节允许的字数范围
pub const MIN_WORD_COUNT: u32 = 500;
pub const MAX_WORD_COUNT: u32 = 3000;

/// 生成新章节命令
///
/// 风格取自 `settings.genre`
#[derive(Debug, Clone)]
pub struct GenerateChapter {
    pub novel_name: String,
    pub protagonist: String,
    pub core_setting: String,
    pub chapter_number: u32,
    pub chapter_title: String,
    pub word_count: u32,
    pub settings: SessionSettings,
}

/// 续写章节命令
#[derive(Debug, Clone)]
pub struct ContinueChapter {
    pub previous_text: String,
    pub instruction: String,
    pub settings: SessionSettings,
}

/// 生成响应（新章节与续写共用）
#[derive(Debug, Clone)]
pub struct GenerationOutput {
    /// 展示标题，如《剑神归来》第1章
    pub heading: String,
    /// 展示内容（失败时为失败提示）
    pub content: String,
    /// 是否为失败结果
    pub failed: bool,
    /// 可下载的 TXT
    pub artifact: ExportArtifact,
}
